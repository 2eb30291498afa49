//! Descriptive statistics over a (filtered) [`TripTable`].
//!
//! Each reporter is a plain value computed from a table and rendered through [`fmt::Display`]:
//!
//! - [`TimeStats`]: most frequent month, day of week and start hour
//! - [`StationStats`]: most frequent start station, end station and start/end pair
//! - [`DurationStats`]: total and mean trip duration
//! - [`UserStats`]: user type counts, gender counts and birth year range/mode
//!
//! Reporters never fail. An empty table renders [`NO_DATA`]; a city without gender or birth year
//! columns renders a "not available" line for those fields.

mod duration;
mod stations;
mod time;
mod users;

use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use crate::trips::TripTable;

pub use duration::{DurationStats, TripDurations};
pub use stations::{PopularStations, StationStats};
pub use time::{PopularTimes, TimeStats};
pub use users::{Availability, BirthYears, UserStats};

/// Rendered in place of a statistic when the filtered table has no rows.
pub const NO_DATA: &str = "No data available for the selected filters.";

/// Horizontal rule printed after every section.
pub const RULE: &str = "----------------------------------------";

/// A statistics section computed from a trip table.
pub trait Report: fmt::Display + Sized {
    /// Line printed before the section is computed.
    const HEADING: &'static str;

    fn compute(table: &TripTable) -> Self;
}

/// Compute `R` over `table` and print it as a timed section.
pub fn write_section<R: Report, W: Write>(out: &mut W, table: &TripTable) -> io::Result<R> {
    writeln!(out, "\n{}\n", R::HEADING)?;
    let started = Instant::now();
    let report = R::compute(table);
    write!(out, "{report}")?;
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{RULE}")?;
    Ok(report)
}

/// Print all four sections in order.
pub fn write_all<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    write_section::<TimeStats, _>(out, table)?;
    write_section::<StationStats, _>(out, table)?;
    write_section::<DurationStats, _>(out, table)?;
    write_section::<UserStats, _>(out, table)?;
    Ok(())
}
