use std::fmt;

use crate::processing::{reduce, ReduceOp};
use crate::selection::{month_name, Day};
use crate::trips::{TripTable, DAY_OF_WEEK, HOUR, MONTH};

use super::{Report, NO_DATA};

/// Most frequent travel times. `None` when the table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats(pub Option<PopularTimes>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularTimes {
    /// Calendar month, 1-12.
    pub month: i64,
    /// Day of week, Monday = 0.
    pub day_of_week: i64,
    /// Start hour, 0-23.
    pub hour: i64,
}

impl PopularTimes {
    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }

    pub fn day(&self) -> Option<Day> {
        Day::from_index(self.day_of_week)
    }
}

fn mode_of(table: &TripTable, column: &str) -> Option<i64> {
    reduce(table.data(), column, ReduceOp::Mode).and_then(|v| v.as_i64())
}

impl Report for TimeStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn compute(table: &TripTable) -> Self {
        let popular = (|| {
            Some(PopularTimes {
                month: mode_of(table, MONTH)?,
                day_of_week: mode_of(table, DAY_OF_WEEK)?,
                hour: mode_of(table, HOUR)?,
            })
        })();
        TimeStats(popular)
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(p) = self.0 else {
            return writeln!(f, "{NO_DATA}");
        };
        match p.month_name() {
            Some(name) => writeln!(f, "Most Popular Month: {name}")?,
            None => writeln!(f, "Most Popular Month: {}", p.month)?,
        }
        match p.day() {
            Some(day) => writeln!(f, "Most Popular Day: {}", day.name())?,
            None => writeln!(f, "Most Popular Day: {}", p.day_of_week)?,
        }
        writeln!(f, "Most Popular Start Hour: {}", p.hour)
    }
}
