use std::fmt;

use crate::processing::{reduce, ReduceOp};
use crate::trips::{TripTable, TRIP_DURATION};

use super::{Report, NO_DATA};

/// Total and mean trip duration in seconds. `None` when the table is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats(pub Option<TripDurations>);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDurations {
    pub total: f64,
    pub mean: f64,
}

impl Report for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration...";

    fn compute(table: &TripTable) -> Self {
        let ds = table.data();
        if ds.is_empty() {
            return DurationStats(None);
        }
        let total = reduce(ds, TRIP_DURATION, ReduceOp::Sum).and_then(|v| v.as_f64());
        let mean = reduce(ds, TRIP_DURATION, ReduceOp::Mean).and_then(|v| v.as_f64());
        DurationStats(total.zip(mean).map(|(total, mean)| TripDurations { total, mean }))
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => {
                writeln!(f, "Total Trip Duration is {} seconds", d.total)?;
                writeln!(f, "Mean Trip Duration is {} seconds", d.mean)
            }
            None => writeln!(f, "{NO_DATA}"),
        }
    }
}
