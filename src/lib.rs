//! `bikeshare-explorer` loads US bike share trip data for one of three cities into an in-memory
//! [`types::DataSet`], filters it by month and day of week, and reports descriptive statistics.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`trips::load_city`] reads `chicago.csv`, `new_york_city.csv` or `washington.csv` and derives
//!    `month`, `day_of_week` (Monday = 0) and `hour` from the start time.
//! 2. [`trips::TripTable::apply`] keeps the rows matching a [`selection::Selection`].
//! 3. The [`report`] module computes popular travel times, popular stations and trip, trip
//!    duration totals and user demographics.
//!
//! [`session::Session`] wraps the pipeline in the interactive prompt loop used by the
//! `bikeshare-explorer` binary.
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::report::{Report, TimeStats};
//! use bikeshare_explorer::selection::{City, Day, DayFilter, Month, MonthFilter, Selection};
//! use bikeshare_explorer::trips::{load_city, LoadOptions};
//!
//! # fn main() -> Result<(), bikeshare_explorer::LoadError> {
//! let table = load_city(City::Chicago, &LoadOptions::default())?;
//! let june = table.apply(&Selection::new(
//!     City::Chicago,
//!     MonthFilter::Only(Month::June),
//!     DayFilter::All,
//! ));
//! println!("{}", TimeStats::compute(&june));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: schema + in-memory dataset types
//! - [`ingestion`]: CSV ingestion and load observers
//! - [`processing`]: filtering and reductions (sum/mean/min/max/mode, value and group counts)
//! - [`selection`]: city, month, day and yes/no choices
//! - [`trips`]: the trip table, its loader and filter
//! - [`report`]: the four statistics sections
//! - [`session`]: the interactive driver
//! - [`config`]: session settings
//! - [`error`]: load errors

pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod selection;
pub mod session;
pub mod trips;
pub mod types;

pub use error::{LoadError, LoadResult};
