//! Reduction operations for [`crate::types::DataSet`].
//!
//! "Most frequent" questions share one tie-break rule: among values with the highest count the
//! smallest value wins, using the total order of [`OrderedValue`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
    /// Arithmetic mean of numeric values, ignoring nulls. Always a `Float64`.
    Mean,
    /// Most frequent non-null value of any type; ties go to the smallest value.
    Mode,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Min`/`Max`/`Mean`/`Mode`, returns `Some(Value::Null)` if there are no non-null
///   values (in particular, for an empty dataset).
/// - For `Count`, always returns `Some(Value::Int64(row_count))`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;

    match op {
        ReduceOp::Count => Some(Value::Int64(dataset.row_count() as i64)),
        ReduceOp::Mean => Some(mean(dataset, idx)),
        ReduceOp::Mode => Some(
            value_counts_at(dataset, idx)
                .into_iter()
                .next()
                .map(|(v, _)| v)
                .unwrap_or(Value::Null),
        ),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => match dataset.schema.fields.get(idx) {
            Some(field) => reduce_numeric_typed(dataset, idx, field.data_type.clone(), op),
            None => None,
        },
    }
}

fn reduce_numeric_typed(
    dataset: &DataSet,
    idx: usize,
    data_type: DataType,
    op: ReduceOp,
) -> Option<Value> {
    match data_type {
        DataType::Int64 => {
            let mut acc: Option<i64> = None;
            for v in dataset.column(idx) {
                if let Value::Int64(v) = v {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => a + v,
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, _) => *v,
                    });
                }
            }
            Some(acc.map(Value::Int64).unwrap_or(Value::Null))
        }
        DataType::Float64 => {
            let mut acc: Option<f64> = None;
            for v in dataset.column(idx) {
                if let Value::Float64(v) = v {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => a + v,
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, _) => *v,
                    });
                }
            }
            Some(acc.map(Value::Float64).unwrap_or(Value::Null))
        }
        _ => Some(Value::Null),
    }
}

fn mean(dataset: &DataSet, idx: usize) -> Value {
    let (sum, n) = dataset
        .column(idx)
        .filter_map(Value::as_f64)
        .fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        Value::Null
    } else {
        Value::Float64(sum / n as f64)
    }
}

/// Count occurrences of each distinct non-null value in `column`.
///
/// Entries are ordered by count (descending), then by value (ascending). Returns `None` if the
/// column does not exist.
pub fn value_counts(dataset: &DataSet, column: &str) -> Option<Vec<(Value, usize)>> {
    let idx = dataset.schema.index_of(column)?;
    Some(value_counts_at(dataset, idx))
}

fn value_counts_at(dataset: &DataSet, idx: usize) -> Vec<(Value, usize)> {
    let mut counts: BTreeMap<OrderedValue, usize> = BTreeMap::new();
    for v in dataset.column(idx).filter(|v| !v.is_null()) {
        *counts.entry(OrderedValue(v.clone())).or_default() += 1;
    }
    let mut out: Vec<(Value, usize)> = counts.into_iter().map(|(k, n)| (k.0, n)).collect();
    // Stable sort keeps ascending value order within equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Group rows by the values of `columns` and count group sizes.
///
/// Groups are returned in ascending key order. Rows with a null in any key column are skipped.
/// Returns `None` if any column does not exist.
pub fn group_counts(dataset: &DataSet, columns: &[&str]) -> Option<Vec<(Vec<Value>, usize)>> {
    let idxs = columns
        .iter()
        .map(|c| dataset.schema.index_of(c))
        .collect::<Option<Vec<_>>>()?;

    let groups = dataset.reduce_rows(BTreeMap::<Vec<OrderedValue>, usize>::new(), |mut acc, row| {
        let key: Option<Vec<OrderedValue>> = idxs
            .iter()
            .map(|&i| match row.get(i) {
                Some(Value::Null) | None => None,
                Some(v) => Some(OrderedValue(v.clone())),
            })
            .collect();
        if let Some(key) = key {
            *acc.entry(key).or_default() += 1;
        }
        acc
    });

    Some(
        groups
            .into_iter()
            .map(|(k, n)| (k.into_iter().map(|v| v.0).collect(), n))
            .collect(),
    )
}

/// The largest group from [`group_counts`]; ties go to the first group in key order.
///
/// Returns `None` if a column is missing or there are no groups.
pub fn top_group(dataset: &DataSet, columns: &[&str]) -> Option<(Vec<Value>, usize)> {
    group_counts(dataset, columns)?
        .into_iter()
        .fold(None, |best: Option<(Vec<Value>, usize)>, (key, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((key, n)),
        })
}

/// A [`Value`] with a total order, usable as a map key.
///
/// Nulls sort first, then numbers (integers and floats compared numerically), then strings,
/// then timestamps.
#[derive(Debug, Clone)]
pub struct OrderedValue(pub Value);

impl OrderedValue {
    fn rank(&self) -> u8 {
        match self.0 {
            Value::Null => 0,
            Value::Int64(_) | Value::Float64(_) => 1,
            Value::Utf8(_) => 2,
            Value::Timestamp(_) => 3,
        }
    }
}

impl Ord for OrderedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Utf8(a), Value::Utf8(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl PartialOrd for OrderedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderedValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedValue {}
