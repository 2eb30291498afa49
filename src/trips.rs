//! The Trip Table: loading a city's trip file, deriving calendar columns, and filtering by the
//! user's month/day selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, Timelike};

use crate::error::{LoadError, LoadResult};
use crate::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use crate::ingestion::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use crate::processing::{filter, int_equals};
use crate::selection::{City, DayFilter, MonthFilter, Selection};
use crate::types::{DataSet, DataType, Field, Schema, Value};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";

/// Columns read from a city's trip file. Gender and birth year are only published by some
/// cities. Only the start time is parsed as a timestamp; the end time is kept as text.
pub fn trip_schema() -> Schema {
    Schema::new(vec![
        Field::new(START_TIME, DataType::Timestamp),
        Field::optional(END_TIME, DataType::Utf8),
        Field::new(TRIP_DURATION, DataType::Float64),
        Field::new(START_STATION, DataType::Utf8),
        Field::new(END_STATION, DataType::Utf8),
        Field::new(USER_TYPE, DataType::Utf8),
        Field::optional(GENDER, DataType::Utf8),
        Field::optional(BIRTH_YEAR, DataType::Float64),
    ])
}

fn derived_fields() -> Vec<Field> {
    vec![
        Field::new(MONTH, DataType::Int64),
        Field::new(DAY_OF_WEEK, DataType::Int64),
        Field::new(HOUR, DataType::Int64),
    ]
}

/// Column positions of a loaded trip table.
///
/// Resolved once after load; `gender` and `birth_year` record whether the city's file carries
/// those columns at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripColumns {
    pub start_time: usize,
    pub trip_duration: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub user_type: usize,
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
    pub month: usize,
    pub day_of_week: usize,
    pub hour: usize,
}

impl TripColumns {
    fn resolve(schema: &Schema) -> LoadResult<Self> {
        let required = |name: &str| {
            schema.index_of(name).ok_or_else(|| LoadError::SchemaMismatch {
                message: format!("trip table has no '{name}' column"),
            })
        };
        Ok(Self {
            start_time: required(START_TIME)?,
            trip_duration: required(TRIP_DURATION)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: required(USER_TYPE)?,
            gender: schema.index_of(GENDER),
            birth_year: schema.index_of(BIRTH_YEAR),
            month: required(MONTH)?,
            day_of_week: required(DAY_OF_WEEK)?,
            hour: required(HOUR)?,
        })
    }
}

/// Trip records for one city, in file order, with derived `month` (1-12), `day_of_week`
/// (Monday = 0) and `hour` (0-23) columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    data: DataSet,
    columns: TripColumns,
}

impl TripTable {
    /// Build a trip table from ingested trip rows, appending the derived calendar columns.
    ///
    /// A missing start time yields nulls in all three derived columns.
    pub fn from_dataset(ds: DataSet) -> LoadResult<Self> {
        let start_idx = ds
            .schema
            .index_of(START_TIME)
            .ok_or_else(|| LoadError::SchemaMismatch {
                message: format!("missing required column '{START_TIME}'"),
            })?;

        let data = ds.append_columns(derived_fields(), |row| match row.get(start_idx) {
            Some(Value::Timestamp(ts)) => vec![
                Value::Int64(i64::from(ts.month())),
                Value::Int64(i64::from(ts.weekday().num_days_from_monday())),
                Value::Int64(i64::from(ts.hour())),
            ],
            _ => vec![Value::Null, Value::Null, Value::Null],
        });
        let columns = TripColumns::resolve(&data.schema)?;
        Ok(Self { data, columns })
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    pub fn columns(&self) -> &TripColumns {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.columns.gender.is_some()
    }

    pub fn has_birth_year(&self) -> bool {
        self.columns.birth_year.is_some()
    }

    /// Keep only rows matching the selection's month and day filters (logical AND), preserving
    /// row order. The selection's city is not consulted.
    pub fn apply(&self, selection: &Selection) -> TripTable {
        let mut data = self.data.clone();
        if let MonthFilter::Only(month) = selection.month {
            data = filter(&data, int_equals(self.columns.month, i64::from(month.number())));
        }
        if let DayFilter::Only(day) = selection.day {
            data = filter(&data, int_equals(self.columns.day_of_week, i64::from(day.index())));
        }
        Self {
            data,
            columns: self.columns,
        }
    }
}

/// Options controlling how city datasets are located and how load outcomes are reported.
#[derive(Clone)]
pub struct LoadOptions {
    /// Directory containing `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("data_dir", &self.data_dir)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl LoadOptions {
    /// Path of a city's dataset under [`Self::data_dir`].
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

/// Load a city's trip table.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count and elapsed time
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn load_city(city: City, options: &LoadOptions) -> LoadResult<TripTable> {
    let ctx = LoadContext {
        city,
        path: options.path_for(city),
    };

    let started = Instant::now();
    let result = load_trips_from_path(&ctx.path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    elapsed: started.elapsed(),
                },
            ),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load a trip table from an explicit CSV path.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> LoadResult<TripTable> {
    ingest_csv_from_path(path, &trip_schema()).and_then(TripTable::from_dataset)
}

/// Load a trip table from an existing CSV reader.
pub fn load_trips_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<TripTable> {
    ingest_csv_from_reader(rdr, &trip_schema()).and_then(TripTable::from_dataset)
}
