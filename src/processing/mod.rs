//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//!
//! - [`filter()`]: row filtering by predicate
//! - [`reduce()`]: column reductions (count/sum/min/max/mean/mode)
//! - [`value_counts()`], [`group_counts()`], [`top_group()`]: frequency tables
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use bikeshare_explorer::processing::{filter, int_equals, reduce, ReduceOp};
//! use bikeshare_explorer::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("month", DataType::Int64),
//!     Field::new("duration", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(6), Value::Float64(300.0)],
//!         vec![Value::Int64(5), Value::Float64(120.0)],
//!         vec![Value::Int64(6), Value::Float64(500.0)],
//!     ],
//! );
//!
//! let june = filter(&ds, int_equals(0, 6));
//! assert_eq!(reduce(&june, "duration", ReduceOp::Sum), Some(Value::Float64(800.0)));
//! assert_eq!(reduce(&june, "duration", ReduceOp::Mean), Some(Value::Float64(400.0)));
//! ```

pub mod filter;
pub mod reduce;

pub use filter::{filter, int_equals};
pub use reduce::{group_counts, reduce, top_group, value_counts, OrderedValue, ReduceOp};
