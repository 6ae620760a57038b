// pipeline.rs - End-to-end run orchestration

use crate::core::arms::{classify_arms, CentromerePolicy, SkippedChromosome};
use crate::core::normalize::normalize_features;
use crate::core::pairs::build_partitions;
use crate::data::feature::{FeatureKind, FeatureTable};
use crate::data::traits::TableSink;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeSet;

/// Options controlling one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub centromere_policy: CentromerePolicy,
    pub keep_self_pairs: bool,
    pub show_progress: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            centromere_policy: CentromerePolicy::Strict,
            keep_self_pairs: true,
            show_progress: false,
        }
    }
}

/// Per-partition row count in the run summary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PartitionSummary {
    pub key: String,
    pub rows: usize,
}

/// Machine-readable summary of one pipeline run
#[derive(Debug, Clone, Serialize, Default)]
pub struct RunSummary {
    pub input_rows: usize,
    pub normalized_features: usize,
    pub orf_count: usize,
    pub centromere_count: usize,
    pub chromosome_count: usize,
    pub classified_orfs: usize,
    pub partitions: Vec<PartitionSummary>,
    pub total_pairs: usize,
    pub skipped_chromosomes: Vec<SkippedChromosome>,
}

/// Run the full transform: normalize, classify arms, build pairwise
/// partitions, and persist each non-empty partition under its
/// `<chromosome>-<arm>` destination key.
///
/// All classification errors surface before the first partition is
/// persisted, so a failed run writes nothing.
pub fn run_pipeline(
    table: &FeatureTable,
    sink: &dyn TableSink,
    options: &PipelineOptions,
) -> Result<RunSummary, String> {
    let features = normalize_features(table)?;

    let orf_count = features.iter().filter(|f| f.kind == FeatureKind::Orf).count();
    let centromere_count = features.len() - orf_count;
    let chromosomes: BTreeSet<&str> = features.iter().map(|f| f.chromosome.as_str()).collect();

    println!(
        "🧬 Normalized {} features: {} ORFs, {} centromeres across {} chromosomes",
        features.len(),
        orf_count,
        centromere_count,
        chromosomes.len()
    );

    let classification = classify_arms(&features, options.centromere_policy)?;
    println!(
        "🗺️  Classified {} ORFs onto chromosome arms ({} chromosomes skipped)",
        classification.assignments.len(),
        classification.skipped.len()
    );

    let partitions = build_partitions(&classification.assignments, options.keep_self_pairs);

    let progress = if options.show_progress {
        let pb = ProgressBar::new(partitions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} partitions")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut summary = RunSummary {
        input_rows: table.rows.len(),
        normalized_features: features.len(),
        orf_count,
        centromere_count,
        chromosome_count: chromosomes.len(),
        classified_orfs: classification.assignments.len(),
        skipped_chromosomes: classification.skipped.clone(),
        ..Default::default()
    };

    for partition in &partitions {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        if partition.pairs.is_empty() {
            continue;
        }

        let key = partition.destination_key();
        sink.persist(&partition.pairs, &key)?;

        summary.total_pairs += partition.pairs.len();
        summary.partitions.push(PartitionSummary {
            key,
            rows: partition.pairs.len(),
        });
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(summary)
}
