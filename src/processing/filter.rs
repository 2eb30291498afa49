//! Row filtering for [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Returns a predicate keeping rows whose `Int64` cell at `idx` equals `expected`.
pub fn int_equals(idx: usize, expected: i64) -> impl Fn(&[Value]) -> bool {
    move |row: &[Value]| matches!(row.get(idx), Some(Value::Int64(v)) if *v == expected)
}
