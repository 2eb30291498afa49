//! User-selectable choices: city, month filter, day filter and yes/no answers.
//!
//! All choices are closed enumerations parsed with [`std::str::FromStr`]. Parsing ignores case and
//! surrounding whitespace, so `" ChIcAgO "` is accepted, but it never accepts partial names:
//! `"chi"`, `"jan"` and `"mon"` are all rejected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A user entry that is not a member of the expected enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid {kind}; expected one of: {expected}")]
pub struct ChoiceError {
    pub kind: &'static str,
    pub input: String,
    pub expected: String,
}

impl ChoiceError {
    fn new(kind: &'static str, input: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            input: input.to_owned(),
            expected: expected.join(", "),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// One of the three cities with a trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's dataset, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| {
                ChoiceError::new("city", s, &City::ALL.map(City::name))
            })
    }
}

/// Months covered by the trip datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Calendar month number, 1-based.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

/// Lower-case English name for a 1-based calendar month number.
pub fn month_name(number: i64) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    usize::try_from(number - 1)
        .ok()
        .and_then(|i| NAMES.get(i).copied())
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Zero-based index with Monday = 0.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: i64) -> Option<Day> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Day::ALL.get(i).copied())
    }
}

/// Month filter: a single month or every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl FromStr for MonthFilter {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .map(MonthFilter::Only)
            .ok_or_else(|| {
                let mut expected: Vec<&str> = Month::ALL.map(Month::name).to_vec();
                expected.push("all");
                ChoiceError::new("month", s, &expected)
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(m.name()),
        }
    }
}

/// Day-of-week filter: a single weekday or every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl FromStr for DayFilter {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        Day::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .map(DayFilter::Only)
            .ok_or_else(|| {
                let mut expected: Vec<&str> = Day::ALL.map(Day::name).to_vec();
                expected.push("all");
                ChoiceError::new("day", s, &expected)
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => f.write_str(d.name()),
        }
    }
}

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl FromStr for YesNo {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            _ => Err(ChoiceError::new("answer", s, &["yes", "no"])),
        }
    }
}

/// The filter triple chosen once per session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection with no month or day restriction.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}
