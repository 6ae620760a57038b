// mod.rs - Core transform module

pub mod arms;
pub mod normalize;
pub mod pairs;
pub mod pipeline;

// Re-export main types for convenience
pub use arms::{classify_arms, index_centromeres, ArmAssignment, ArmClassification};
pub use arms::{CentromereBounds, CentromerePolicy, SkippedChromosome};
pub use normalize::normalize_features;
pub use pairs::{build_partitions, destination_key, pair_distance, Partition};
pub use pipeline::{run_pipeline, PartitionSummary, PipelineOptions, RunSummary};
