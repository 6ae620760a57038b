// arms.rs - Centromere indexing and chromosome arm classification

use crate::data::feature::{Arm, Feature, FeatureKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Centromere coordinate bounds for one chromosome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentromereBounds {
    pub cen_min: i64,
    pub cen_max: i64,
}

/// Policy for chromosomes that do not carry exactly one centromere feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentromerePolicy {
    /// Abort the whole run on the first invalid chromosome
    Strict,
    /// Skip invalid chromosomes and report them in the run summary
    Skip,
}

impl FromStr for CentromerePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(CentromerePolicy::Strict),
            "skip" => Ok(CentromerePolicy::Skip),
            _ => Err(format!(
                "Invalid centromere policy: {}. Use: strict, skip",
                s
            )),
        }
    }
}

impl CentromerePolicy {
    pub fn description(&self) -> &'static str {
        match self {
            CentromerePolicy::Strict => "abort on missing/ambiguous centromere",
            CentromerePolicy::Skip => "skip and report invalid chromosomes",
        }
    }
}

/// An ORF feature with its assigned chromosome arm
#[derive(Debug, Clone)]
pub struct ArmAssignment {
    pub feature: Feature,
    pub arm: Arm,
}

/// A chromosome excluded from processing under the skip policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedChromosome {
    pub chromosome: String,
    pub reason: String,
    pub orf_count: usize,
}

/// Result of arm classification over a normalized feature set
#[derive(Debug, Default)]
pub struct ArmClassification {
    /// Assignments in deterministic order: chromosomes sorted, input order within
    pub assignments: Vec<ArmAssignment>,
    pub skipped: Vec<SkippedChromosome>,
}

/// Collect all centromere bounds per chromosome.
/// More than one entry for a chromosome is a data-quality condition the
/// classifier surfaces; this index never picks silently.
pub fn index_centromeres(features: &[Feature]) -> BTreeMap<String, Vec<CentromereBounds>> {
    let mut index: BTreeMap<String, Vec<CentromereBounds>> = BTreeMap::new();
    for feature in features {
        if feature.kind == FeatureKind::Centromere {
            index.entry(feature.chromosome.clone()).or_default().push(CentromereBounds {
                cen_min: feature.min,
                cen_max: feature.max,
            });
        }
    }
    index
}

/// Classify every ORF onto a chromosome arm.
///
/// Arm rule: `left` iff the feature's max coordinate lies strictly below the
/// centromere's min coordinate, otherwise `right` (a tie classifies right).
/// A chromosome carrying ORFs must have exactly one centromere feature;
/// otherwise the policy decides between aborting and skip-with-report.
pub fn classify_arms(
    features: &[Feature],
    policy: CentromerePolicy,
) -> Result<ArmClassification, String> {
    let centromeres = index_centromeres(features);

    // Group ORFs per chromosome, preserving input order within each group
    let mut orfs_by_chromosome: BTreeMap<String, Vec<&Feature>> = BTreeMap::new();
    for feature in features {
        if feature.kind == FeatureKind::Orf {
            orfs_by_chromosome
                .entry(feature.chromosome.clone())
                .or_default()
                .push(feature);
        }
    }

    let mut result = ArmClassification::default();

    for (chromosome, orfs) in &orfs_by_chromosome {
        let bounds = match centromeres.get(chromosome).map(|v| v.as_slice()) {
            Some([bounds]) => *bounds,
            found => {
                let count = found.map(|v| v.len()).unwrap_or(0);
                let reason = format!("{} centromere features (expected exactly 1)", count);
                match policy {
                    CentromerePolicy::Strict => {
                        return Err(format!(
                            "Chromosome '{}' has {}; cannot classify arms for {} ORFs",
                            chromosome,
                            reason,
                            orfs.len()
                        ));
                    }
                    CentromerePolicy::Skip => {
                        println!(
                            "⚠️  Skipping chromosome '{}': {} ({} ORFs dropped)",
                            chromosome,
                            reason,
                            orfs.len()
                        );
                        result.skipped.push(SkippedChromosome {
                            chromosome: chromosome.clone(),
                            reason,
                            orf_count: orfs.len(),
                        });
                        continue;
                    }
                }
            }
        };

        for orf in orfs {
            let arm = if orf.max < bounds.cen_min {
                Arm::Left
            } else {
                Arm::Right
            };
            result.assignments.push(ArmAssignment {
                feature: (*orf).clone(),
                arm,
            });
        }
    }

    Ok(result)
}
