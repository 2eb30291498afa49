//! Ingestion of trip files.
//!
//! - [`csv`]: header-mapped CSV ingestion into a [`crate::types::DataSet`]
//! - [`observability`]: the [`LoadObserver`] seam used to report load outcomes
//!
//! City-level loading (path resolution, derived calendar columns, observer reporting) lives in
//! [`crate::trips::load_city`].

pub mod csv;
pub mod observability;

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver,
};
