//! Core data model types.
//!
//! Trip files are ingested into an in-memory [`DataSet`], using a [`Schema`] (a list of typed
//! [`Field`]s). Later stages never mutate a dataset in place; filtering and column derivation
//! return new datasets.

use std::fmt;

use chrono::NaiveDateTime;

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
    /// Calendar date and time without a time zone.
    Timestamp,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
    /// Whether ingestion fails when the column is missing from the source.
    pub required: bool,
}

impl Field {
    /// Create a new required field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
        }
    }

    /// Create a field that may be absent from the source.
    ///
    /// Absent optional fields are dropped from the ingested dataset's schema rather than being
    /// filled with nulls, so callers can tell "no such column" apart from "all values empty".
    pub fn optional(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            required: false,
            ..Self::new(name, data_type)
        }
    }
}

/// A list of fields describing the shape of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Date and time.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Numeric view of the value, if it is an integer or a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the value. Floats with no fractional part are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            Value::Float64(v) if v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NaN"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of one column, by index.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Create a new dataset with `fields` appended to the schema, filling each row's new cells
    /// from `derive`.
    ///
    /// # Panics
    ///
    /// Panics if `derive` returns a different number of values than `fields.len()`.
    pub fn append_columns<F>(&self, fields: Vec<Field>, mut derive: F) -> Self
    where
        F: FnMut(&[Value]) -> Vec<Value>,
    {
        let added = fields.len();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let extra = derive(row.as_slice());
                assert!(
                    extra.len() == added,
                    "derived value count {} does not match appended field count {}",
                    extra.len(),
                    added
                );
                let mut out = Vec::with_capacity(row.len() + added);
                out.extend(row.iter().cloned());
                out.extend(extra);
                out
            })
            .collect();

        let mut schema = self.schema.clone();
        schema.fields.extend(fields);
        Self { schema, rows }
    }

    /// Borrow rows `[offset, offset + len)`, clamped to the dataset bounds.
    pub fn slice(&self, offset: usize, len: usize) -> &[Vec<Value>] {
        let start = offset.min(self.rows.len());
        let end = offset.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Reduce (fold) all rows into an accumulator value.
    ///
    /// This is similar to `Iterator::fold`, but provides each row as `&[Value]`.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &[Value]) -> A,
    {
        self.rows
            .iter()
            .fold(init, |acc, row| reducer(acc, row.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Value};

    fn sample() -> DataSet {
        DataSet::new(
            Schema::new(vec![Field::new("n", DataType::Int64)]),
            (1..=7).map(|n| vec![Value::Int64(n)]).collect(),
        )
    }

    #[test]
    fn append_columns_extends_schema_and_rows() {
        let ds = sample();
        let out = ds.append_columns(vec![Field::new("double", DataType::Int64)], |row| {
            vec![Value::Int64(row[0].as_i64().unwrap() * 2)]
        });

        assert_eq!(out.schema.index_of("double"), Some(1));
        assert_eq!(out.rows[2], vec![Value::Int64(3), Value::Int64(6)]);
        // Original unchanged
        assert_eq!(ds.schema.fields.len(), 1);
    }

    #[test]
    #[should_panic(expected = "derived value count")]
    fn append_columns_panics_on_wrong_arity() {
        let _ = sample().append_columns(vec![Field::new("x", DataType::Int64)], |_| vec![]);
    }

    #[test]
    fn slice_is_clamped_to_bounds() {
        let ds = sample();
        assert_eq!(ds.slice(0, 5).len(), 5);
        assert_eq!(ds.slice(5, 5).len(), 2);
        assert!(ds.slice(10, 5).is_empty());
    }

    #[test]
    fn optional_field_is_not_required() {
        assert!(Field::new("a", DataType::Utf8).required);
        assert!(!Field::optional("a", DataType::Utf8).required);
    }

    #[test]
    fn value_numeric_views() {
        assert_eq!(Value::Float64(1992.0).as_i64(), Some(1992));
        assert_eq!(Value::Float64(1992.5).as_i64(), None);
        assert_eq!(Value::Int64(3).as_f64(), Some(3.0));
        assert_eq!(Value::Utf8("x".into()).as_f64(), None);
    }
}
