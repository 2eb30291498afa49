//! Runtime settings for an interactive session.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ingestion::{LoadObserver, LoadSeverity};
use crate::trips::LoadOptions;

/// Rows shown per page of raw trip data.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory containing the three city CSV files.
    pub data_dir: PathBuf,
    /// Raw rows shown per page; values below 1 are treated as 1.
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Loader options for this configuration.
    pub fn load_options(&self, observer: Option<Arc<dyn LoadObserver>>) -> LoadOptions {
        LoadOptions {
            data_dir: self.data_dir.clone(),
            observer,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}
