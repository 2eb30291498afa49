use std::fmt;

use crate::processing::{reduce, top_group, ReduceOp};
use crate::trips::{TripTable, END_STATION, START_STATION};
use crate::types::Value;

use super::{Report, NO_DATA};

/// Most popular stations and trip. `None` when the table is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats(pub Option<PopularStations>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularStations {
    pub start_station: String,
    pub end_station: String,
    /// Most frequent (start, end) combination.
    pub trip: (String, String),
    pub trip_count: usize,
}

fn text(v: Value) -> Option<String> {
    match v {
        Value::Utf8(s) => Some(s),
        _ => None,
    }
}

impl Report for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn compute(table: &TripTable) -> Self {
        let ds = table.data();
        let popular = (|| {
            let start_station = text(reduce(ds, START_STATION, ReduceOp::Mode)?)?;
            let end_station = text(reduce(ds, END_STATION, ReduceOp::Mode)?)?;
            let (key, trip_count) = top_group(ds, &[START_STATION, END_STATION])?;
            let mut key = key.into_iter().map(text);
            let trip = (key.next()??, key.next()??);
            Some(PopularStations {
                start_station,
                end_station,
                trip,
                trip_count,
            })
        })();
        StationStats(popular)
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(p) = &self.0 else {
            return writeln!(f, "{NO_DATA}");
        };
        writeln!(f, "The most popular Start Station is {}", p.start_station)?;
        writeln!(f, "The most popular End Station is {}", p.end_station)?;
        writeln!(f, "\nMost Frequent Combination of Start and End Station Trips:\n")?;
        writeln!(f, "  {} -> {}  ({} trips)", p.trip.0, p.trip.1, p.trip_count)
    }
}
