use std::fmt;

use crate::processing::{reduce, value_counts, ReduceOp};
use crate::trips::{TripTable, BIRTH_YEAR, GENDER, USER_TYPE};
use crate::types::Value;

use super::{Report, NO_DATA};

/// Whether a city's dataset carries a column at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Availability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::NotAvailable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Demographics of the riders in a trip table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Count per user type, most frequent first.
    pub user_types: Vec<(String, usize)>,
    /// Count per gender, most frequent first.
    pub gender: Availability<Vec<(String, usize)>>,
    /// `Available(None)` when the column exists but the table holds no birth years.
    pub birth_year: Availability<Option<BirthYears>>,
}

fn counts(table: &TripTable, column: &str) -> Vec<(String, usize)> {
    value_counts(table.data(), column)
        .unwrap_or_default()
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

fn year(table: &TripTable, op: ReduceOp) -> Option<i64> {
    reduce(table.data(), BIRTH_YEAR, op)
        .as_ref()
        .and_then(Value::as_f64)
        .map(|y| y.round() as i64)
}

impl Report for UserStats {
    const HEADING: &'static str = "Calculating User Stats...";

    fn compute(table: &TripTable) -> Self {
        let gender = if table.has_gender() {
            Availability::Available(counts(table, GENDER))
        } else {
            Availability::NotAvailable
        };

        let birth_year = if table.has_birth_year() {
            Availability::Available((|| {
                Some(BirthYears {
                    earliest: year(table, ReduceOp::Min)?,
                    most_recent: year(table, ReduceOp::Max)?,
                    most_common: year(table, ReduceOp::Mode)?,
                })
            })())
        } else {
            Availability::NotAvailable
        };

        UserStats {
            user_types: counts(table, USER_TYPE),
            gender,
            birth_year,
        }
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, label: &str, counts: &[(String, usize)]) -> fmt::Result {
    writeln!(f, "{label}:")?;
    if counts.is_empty() {
        return writeln!(f, "  {NO_DATA}");
    }
    for (value, n) in counts {
        writeln!(f, "  {value}: {n}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User Types", &self.user_types)?;

        match &self.gender {
            Availability::Available(c) => write_counts(f, "\nGender", c)?,
            Availability::NotAvailable => writeln!(f, "\nGender data is not available for this city.")?,
        }

        match &self.birth_year {
            Availability::Available(Some(b)) => {
                writeln!(f, "\nEarliest year of birth: {}", b.earliest)?;
                writeln!(f, "Most recent year of birth: {}", b.most_recent)?;
                writeln!(f, "Most common year of birth: {}", b.most_common)
            }
            Availability::Available(None) => writeln!(f, "\nYear of birth: {NO_DATA}"),
            Availability::NotAvailable => {
                writeln!(f, "\nBirth year data is not available for this city.")
            }
        }
    }
}
