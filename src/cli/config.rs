// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub features: Option<String>,
    pub output_dir: Option<String>,
    pub format: Option<String>,

    // Chromosome filtering
    pub include_chromosomes: Option<String>,
    pub exclude_chromosomes: Option<String>,

    // Policies
    pub skip_invalid_chromosomes: Option<bool>,
    pub drop_self_pairs: Option<bool>,

    // Reports
    pub report_log: Option<String>,
    pub summary_json: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# armdist.toml - Configuration file for armdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to feature table (.csv or .tsv)
features = "/path/to/features.csv"

# Output directory for partition files (one file per chromosome arm)
output_dir = "distances"

# Output format: csv, tsv
format = "csv"

# =============================================================================
# CHROMOSOME FILTERING
# =============================================================================

# Include only chromosomes matching regex pattern
# include_chromosomes = "^(I|II|III)$"

# Exclude chromosomes matching regex pattern
# exclude_chromosomes = "^(mito|2-micron)$"

# =============================================================================
# POLICIES
# =============================================================================

# Skip chromosomes without exactly one centromere instead of aborting
skip_invalid_chromosomes = false

# Drop self-pairs (A,A) from the output (kept by default)
drop_self_pairs = false

# =============================================================================
# REPORTS
# =============================================================================

# CSV log of chromosomes skipped under skip_invalid_chromosomes
# report_log = "skipped.csv"

# Machine-readable run summary
# summary_json = "summary.json"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without writing output (dry run)
dry_run = false
"#
        .to_string()
    }
}
