// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::CentromerePolicy;
use crate::output::OutputFormat;
use regex::Regex;
use std::str::FromStr;

#[derive(Debug)]
pub struct ValidationResult {
    pub format: OutputFormat,
    pub centromere_policy: CentromerePolicy,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate output format
    let format = OutputFormat::from_str(&args.format)?;

    // Report log only makes sense when the skip policy can produce entries
    if args.report_log.is_some() && !args.skip_invalid_chromosomes {
        return Err(
            "--report-log requires --skip-invalid-chromosomes (strict policy aborts instead of skipping)"
                .to_string(),
        );
    }

    let centromere_policy = if args.skip_invalid_chromosomes {
        CentromerePolicy::Skip
    } else {
        CentromerePolicy::Strict
    };

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_chromosomes {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_chromosomes regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_chromosomes {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_chromosomes regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        format,
        centromere_policy,
        include_regex,
        exclude_regex,
    })
}
