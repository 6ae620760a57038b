// traits.rs - Fetch and persist collaborator seams

use crate::data::feature::{FeatureTable, GenePair};
use std::fmt::Debug;
use std::path::Path;

/// Trait for fetching a tabular feature dataset from a source location.
/// The core pipeline only requires deterministic column names, not any
/// particular transport; tests inject in-memory implementations.
pub trait TableSource: Debug {
    /// Fetch the feature table identified by `source`
    fn fetch(&self, source: &str) -> Result<FeatureTable, String>;

    /// Get a human-readable name for this source
    fn name(&self) -> &'static str;
}

/// Trait for persisting one partition of pair rows under a destination key
pub trait TableSink: Debug {
    /// Persist `pairs` to the destination identified by `destination_key`
    fn persist(&self, pairs: &[GenePair], destination_key: &str) -> Result<(), String>;

    /// Get a human-readable name for this sink
    fn name(&self) -> &'static str;
}

/// File-backed source: reads `.csv` or `.tsv` feature tables from disk
#[derive(Debug, Default)]
pub struct FileSource;

impl TableSource for FileSource {
    fn fetch(&self, source: &str) -> Result<FeatureTable, String> {
        FeatureTable::from_file(Path::new(source))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
