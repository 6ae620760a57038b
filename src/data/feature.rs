// feature.rs - Genome feature records and table container

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

/// Feature type retained by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Orf,
    Centromere,
}

impl FeatureKind {
    /// Map a raw `type` column value onto a retained kind.
    /// Returns None for feature types the pipeline discards.
    pub fn from_type_str(s: &str) -> Option<Self> {
        match s {
            "ORF" => Some(FeatureKind::Orf),
            "centromere" => Some(FeatureKind::Centromere),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Orf => "ORF",
            FeatureKind::Centromere => "centromere",
        }
    }
}

/// Chromosome arm relative to the centromere
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arm::Left => "left",
            Arm::Right => "right",
        }
    }
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the input feature table, fields split but coordinates unparsed.
/// Coordinate parsing happens after the type filter so that feature types the
/// pipeline discards may carry blank or non-numeric coordinates.
#[derive(Debug, Clone)]
pub struct RawFeature {
    pub gene_id: String,
    pub feature_type: String,
    pub orf_id: String,
    pub gene_name: String,
    pub chromosome: String,
    pub start: String,
    pub stop: String,
    /// 1-based line number in the source file, for error reporting
    pub line: usize,
}

/// Normalized feature: retained kind, resolved display name, ordered coordinates
#[derive(Debug, Clone)]
pub struct Feature {
    pub gene_id: String,
    pub orf_id: String,
    pub gene_name: String,
    pub chromosome: String,
    pub kind: FeatureKind,
    pub min: i64,
    pub max: i64,
}

/// One emitted pair of ORFs sharing a chromosome arm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenePair {
    pub chromosome: String,
    pub arm: Arm,
    pub gene_id_a: String,
    pub gene_id_b: String,
    pub orf_id_a: String,
    pub orf_id_b: String,
    pub gene_name_a: String,
    pub gene_name_b: String,
    pub distance: u64,
}

/// Raw feature table as loaded from a source
#[derive(Debug, Default)]
pub struct FeatureTable {
    pub rows: Vec<RawFeature>,
    /// Human-readable origin (file path or fixture label) for error messages
    pub origin: String,
}

impl FeatureTable {
    pub fn new(origin: &str) -> Self {
        Self {
            rows: Vec::new(),
            origin: origin.to_string(),
        }
    }

    /// Load a feature table from file, dispatching on extension (.tsv or .csv)
    pub fn from_file(file_path: &Path) -> Result<Self, String> {
        println!("📊 Loading feature table: {}", file_path.display());

        let extension = file_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("csv");

        match extension {
            "tsv" => Self::from_tsv(file_path),
            _ => Self::from_csv(file_path),
        }
    }

    /// Keep only rows whose chromosome label passes the include/exclude filters
    pub fn apply_chromosome_filters(
        &mut self,
        include: Option<&Regex>,
        exclude: Option<&Regex>,
    ) {
        if include.is_none() && exclude.is_none() {
            return;
        }

        let initial_rows = self.rows.len();
        self.rows.retain(|row| {
            if let Some(regex) = include {
                if !regex.is_match(&row.chromosome) {
                    return false;
                }
            }
            if let Some(regex) = exclude {
                if regex.is_match(&row.chromosome) {
                    return false;
                }
            }
            true
        });

        let kept = self.rows.len();
        if kept != initial_rows {
            println!(
                "Chromosome filters: kept {} rows (removed {})",
                kept,
                initial_rows - kept
            );
        }
    }

    /// Print table statistics
    pub fn print_table_statistics(&self, phase: &str) {
        println!("\n📊 === FEATURE TABLE STATISTICS ({}) ===", phase);

        let mut type_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for row in &self.rows {
            *type_counts.entry(row.feature_type.as_str()).or_insert(0) += 1;
        }

        let orf_rows = type_counts.get("ORF").copied().unwrap_or(0);
        let centromere_rows = type_counts.get("centromere").copied().unwrap_or(0);
        let retained = orf_rows + centromere_rows;
        let discarded = self.rows.len() - retained;

        println!("  📏 Total rows: {}", self.rows.len());
        println!(
            "  🧬 Retained types: {} ORF, {} centromere ({} rows discarded)",
            orf_rows, centromere_rows, discarded
        );

        // Per-chromosome breakdown of retained rows
        let mut chrom_counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for row in &self.rows {
            match row.feature_type.as_str() {
                "ORF" => chrom_counts.entry(&row.chromosome).or_insert((0, 0)).0 += 1,
                "centromere" => chrom_counts.entry(&row.chromosome).or_insert((0, 0)).1 += 1,
                _ => {}
            }
        }
        println!("  🗺️  Chromosomes: {}", chrom_counts.len());
        for (chromosome, (orfs, centromeres)) in &chrom_counts {
            let marker = if *centromeres == 1 { "✅" } else { "⚠️ " };
            println!(
                "    {} {:<12} {:>5} ORFs, {} centromere(s)",
                marker, chromosome, orfs, centromeres
            );
        }

        // Name coverage over ORF rows
        if orf_rows > 0 {
            let named = self
                .rows
                .iter()
                .filter(|r| r.feature_type == "ORF")
                .filter(|r| !r.gene_name.is_empty() || !r.orf_id.is_empty())
                .count();
            println!(
                "  🏷️  ORFs with a resolvable name: {} ({:.1}%)",
                named,
                100.0 * named as f64 / orf_rows as f64
            );
        }
    }
}
