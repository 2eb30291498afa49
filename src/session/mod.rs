//! The interactive session driver.
//!
//! A session walks an explicit state machine:
//!
//! ```text
//! Prompting ──▶ Reporting ──▶ Paginating ──▶ Restarting ──▶ Done
//!     ▲             │                             │
//!     │             └──── load failure ──────────▶│
//!     └───────────────────── "yes" ───────────────┘
//! ```
//!
//! Invalid answers are re-asked in place and never change state. Running out of input while
//! waiting for an answer ends the session.

mod prompt;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::ingestion::LoadObserver;
use crate::report::{self, RULE};
use crate::selection::{City, DayFilter, MonthFilter, Selection, YesNo};
use crate::trips::{self, LoadOptions, TripTable};
use crate::types::DataSet;

pub use prompt::prompt;

const GREETING: &str = "Hello! Let's explore some US bike share data!";
const FAREWELL: &str = "Thank you. See you again!!!";
const YES_NO_RETRY: &str = "Please enter yes or no:\n";

/// Where the session is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Collecting city, month and day.
    Prompting,
    /// Loading, filtering and printing the four report sections.
    Reporting(Selection),
    /// Offering raw rows, one page at a time.
    Paginating,
    /// Asking whether to start over.
    Restarting,
    Done,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Prompting => f.write_str("prompting"),
            SessionState::Reporting(s) => {
                write!(f, "reporting(city={}, month={}, day={})", s.city, s.month, s.day)
            }
            SessionState::Paginating => f.write_str("paginating"),
            SessionState::Restarting => f.write_str("restarting"),
            SessionState::Done => f.write_str("done"),
        }
    }
}

/// One interactive run over `input` and `out`.
pub struct Session<R, W> {
    input: R,
    out: W,
    page_size: usize,
    load_options: LoadOptions,
    state: SessionState,
    /// Filtered table of the current iteration.
    table: Option<TripTable>,
    /// Next raw row to show; reset for every iteration.
    offset: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: &SessionConfig) -> Self {
        Self::with_observer(input, out, config, None)
    }

    pub fn with_observer(
        input: R,
        out: W,
        config: &SessionConfig,
        observer: Option<Arc<dyn LoadObserver>>,
    ) -> Self {
        Self {
            input,
            out,
            page_size: config.page_size(),
            load_options: config.load_options(observer),
            state: SessionState::Prompting,
            table: None,
            offset: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drive the state machine until [`SessionState::Done`].
    pub fn run(&mut self) -> io::Result<()> {
        while self.state != SessionState::Done {
            let next = self.step()?;
            log::debug!("session: {} -> {}", self.state, next);
            self.state = next;
        }
        Ok(())
    }

    /// Execute the current state and return the next one.
    pub fn step(&mut self) -> io::Result<SessionState> {
        match self.state {
            SessionState::Prompting => self.collect_selection(),
            SessionState::Reporting(selection) => self.report(selection),
            SessionState::Paginating => self.paginate(),
            SessionState::Restarting => self.ask_restart(),
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    fn ask<T: std::str::FromStr>(&mut self, question: &str, retry: &str) -> io::Result<Option<T>> {
        prompt(&mut self.input, &mut self.out, question, retry)
    }

    fn collect_selection(&mut self) -> io::Result<SessionState> {
        writeln!(self.out, "{GREETING}")?;

        let Some(city) = self.ask::<City>(
            "Would you like to see data for Chicago, New York City, or Washington?\n",
            "Invalid input. Please enter Chicago, New York City, or Washington:\n",
        )?
        else {
            return Ok(SessionState::Done);
        };
        let Some(month) = self.ask::<MonthFilter>(
            "Which month would you like to filter by? (all, january, february, ..., june)\n",
            "Invalid input. Please enter a valid month or 'all':\n",
        )?
        else {
            return Ok(SessionState::Done);
        };
        let Some(day) = self.ask::<DayFilter>(
            "Which day of the week would you like to filter by? (all, monday, tuesday, ..., sunday)\n",
            "Invalid input. Please enter a valid day or 'all':\n",
        )?
        else {
            return Ok(SessionState::Done);
        };

        writeln!(self.out, "{RULE}")?;
        Ok(SessionState::Reporting(Selection::new(city, month, day)))
    }

    fn report(&mut self, selection: Selection) -> io::Result<SessionState> {
        self.table = None;
        self.offset = 0;

        let table = match trips::load_city(selection.city, &self.load_options) {
            Ok(table) => table,
            Err(e) => {
                writeln!(
                    self.out,
                    "Could not load data for {} ({}): {e}",
                    selection.city,
                    self.load_options.path_for(selection.city).display()
                )?;
                writeln!(self.out, "{RULE}")?;
                return Ok(SessionState::Restarting);
            }
        };

        let filtered = table.apply(&selection);
        writeln!(
            self.out,
            "{} of {} trips match city={}, month={}, day={}.",
            filtered.row_count(),
            table.row_count(),
            selection.city,
            selection.month,
            selection.day
        )?;
        report::write_all(&mut self.out, &filtered)?;
        self.table = Some(filtered);
        Ok(SessionState::Paginating)
    }

    fn paginate(&mut self) -> io::Result<SessionState> {
        let Some(table) = self.table.as_ref() else {
            return Ok(SessionState::Restarting);
        };
        if table.is_empty() {
            writeln!(self.out, "\nNo raw data to display.")?;
            return Ok(SessionState::Restarting);
        }

        let question = if self.offset == 0 {
            format!("\nWould you like to see {} rows of raw data? (yes/no)\n", self.page_size)
        } else {
            format!("\nWould you like to see {} more rows? (yes/no)\n", self.page_size)
        };
        let Some(answer) = self.ask::<YesNo>(&question, YES_NO_RETRY)? else {
            return Ok(SessionState::Done);
        };
        if !answer.is_yes() {
            return Ok(SessionState::Restarting);
        }

        // Re-borrow after the prompt, which needed `&mut self`.
        let Some(table) = self.table.as_ref() else {
            return Ok(SessionState::Restarting);
        };
        write_rows(&mut self.out, table.data(), self.offset, self.page_size)?;
        self.offset += self.page_size;

        if self.offset >= table.row_count() {
            writeln!(self.out, "\nNo more rows to display.")?;
            return Ok(SessionState::Restarting);
        }
        Ok(SessionState::Paginating)
    }

    fn ask_restart(&mut self) -> io::Result<SessionState> {
        let Some(answer) = self.ask::<YesNo>("\nWould you like to restart? (yes/no)\n", YES_NO_RETRY)?
        else {
            return Ok(SessionState::Done);
        };
        if answer.is_yes() {
            self.table = None;
            self.offset = 0;
            Ok(SessionState::Prompting)
        } else {
            writeln!(self.out, "{FAREWELL}")?;
            Ok(SessionState::Done)
        }
    }
}

/// Print rows `[offset, offset + len)` under a header of column names, prefixed by row number.
pub fn write_rows<W: Write>(out: &mut W, ds: &DataSet, offset: usize, len: usize) -> io::Result<()> {
    let header: Vec<&str> = ds.schema.field_names().collect();
    writeln!(out, "#\t{}", header.join("\t"))?;
    for (i, row) in ds.slice(offset, len).iter().enumerate() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}\t{}", offset + i, cells.join("\t"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataType, Field, Schema, Value};

    #[test]
    fn write_rows_prints_header_and_numbered_rows() {
        let ds = DataSet::new(
            Schema::new(vec![
                Field::new("a", DataType::Int64),
                Field::new("b", DataType::Utf8),
            ]),
            (0..3)
                .map(|i| vec![Value::Int64(i), Value::Utf8(format!("s{i}"))])
                .collect(),
        );
        let mut out = Vec::new();
        write_rows(&mut out, &ds, 1, 5).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#\ta\tb\n1\t1\ts1\n2\t2\ts2\n");
    }

    #[test]
    fn closed_input_ends_session_without_loading() {
        let input: &[u8] = b"";
        let mut out = Vec::new();
        let mut session = Session::new(input, &mut out, &SessionConfig::default());
        session.run().unwrap();
        assert_eq!(session.state(), SessionState::Done);
        drop(session);
        assert!(String::from_utf8(out).unwrap().starts_with(GREETING));
    }
}
