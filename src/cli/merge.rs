// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.features.is_none() {
            self.features = config.features;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "csv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }

        // Chromosome filtering
        if self.include_chromosomes.is_none() {
            self.include_chromosomes = config.include_chromosomes;
        }
        if self.exclude_chromosomes.is_none() {
            self.exclude_chromosomes = config.exclude_chromosomes;
        }

        // Reports
        if self.report_log.is_none() {
            self.report_log = config.report_log;
        }
        if self.summary_json.is_none() {
            self.summary_json = config.summary_json;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.skip_invalid_chromosomes && config.skip_invalid_chromosomes.unwrap_or(false) {
            self.skip_invalid_chromosomes = true;
        }
        if !self.drop_self_pairs && config.drop_self_pairs.unwrap_or(false) {
            self.drop_self_pairs = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> Args {
        Args {
            features: None,
            output_dir: None,
            format: "csv".to_string(),
            include_chromosomes: None,
            exclude_chromosomes: None,
            skip_invalid_chromosomes: false,
            drop_self_pairs: false,
            report_log: None,
            summary_json: None,
            stats_only: false,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_config_fills_unset_options() {
        let config = Config {
            features: Some("features.csv".to_string()),
            output_dir: Some("out".to_string()),
            format: Some("tsv".to_string()),
            skip_invalid_chromosomes: Some(true),
            ..Config::default()
        };

        let merged = empty_args().merge_with_config(config);
        assert_eq!(merged.features.as_deref(), Some("features.csv"));
        assert_eq!(merged.output_dir.as_deref(), Some("out"));
        assert_eq!(merged.format, "tsv");
        assert!(merged.skip_invalid_chromosomes);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let mut args = empty_args();
        args.features = Some("cli.csv".to_string());
        args.format = "tsv".to_string();

        let config = Config {
            features: Some("config.csv".to_string()),
            format: Some("csv".to_string()),
            ..Config::default()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.features.as_deref(), Some("cli.csv"));
        assert_eq!(merged.format, "tsv"); // non-default CLI value wins
    }
}
