// lib.rs - armdist library root

//! # armdist - Chromosome-arm partitioned pairwise gene distance calculator
//!
//! This library reshapes a genome-annotation feature table into a derived
//! genetic distance table: ORFs are classified onto chromosome arms using
//! each chromosome's centromere bounds, all pairwise inter-gene distances
//! are computed per arm, and the result is partitioned into one tabular
//! output per (chromosome, arm).
//!
//! ## Features
//!
//! - **Typed records**: named struct fields instead of stringly column access
//! - **Injectable I/O**: narrow fetch/persist traits, testable with in-memory fixtures
//! - **Explicit policies**: strict abort or skip+report for missing/ambiguous centromeres
//! - **Deterministic output**: sorted partitions, stable destination keys
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use armdist::prelude::*;
//! use std::path::Path;
//!
//! // Fetch the feature table from a CSV or TSV file
//! let table = FileSource.fetch("features.csv")?;
//!
//! // Persist one file per (chromosome, arm) partition
//! let sink = DirectorySink::new(Path::new("distances"), OutputFormat::Csv, "armdist");
//!
//! let summary = run_pipeline(&table, &sink, &PipelineOptions::default())?;
//! println!("{} pairs across {} partitions", summary.total_pairs, summary.partitions.len());
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{classify_arms, normalize_features, run_pipeline};
    pub use crate::core::{CentromerePolicy, PipelineOptions, RunSummary};
    pub use crate::data::{Arm, Feature, FeatureKind, FeatureTable, GenePair};
    pub use crate::data::{FileSource, TableSink, TableSource};
    pub use crate::output::{DirectorySink, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{CentromerePolicy, PipelineOptions, RunSummary};
pub use data::{Arm, Feature, FeatureKind, FeatureTable, GenePair};
pub use output::{DirectorySink, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "armdist v{} - Chromosome-arm partitioned gene distance calculator",
        VERSION
    )
}
