// report.rs - CSV report log for skipped chromosomes

use crate::core::arms::SkippedChromosome;
use csv::Writer;
use std::path::Path;

/// Write the skip-policy report log: one row per chromosome excluded from
/// processing, with the reason and the number of ORFs dropped with it.
pub fn write_skip_report(file_path: &Path, skipped: &[SkippedChromosome]) -> Result<(), String> {
    let mut writer = Writer::from_path(file_path)
        .map_err(|e| format!("Failed to create report log '{}': {}", file_path.display(), e))?;

    writer
        .write_record(["chromosome", "reason", "orf_count"])
        .map_err(|e| format!("Failed to write report header: {}", e))?;

    for entry in skipped {
        writer
            .write_record([
                entry.chromosome.as_str(),
                entry.reason.as_str(),
                &entry.orf_count.to_string(),
            ])
            .map_err(|e| {
                format!("Failed to write report row for '{}': {}", entry.chromosome, e)
            })?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush report log: {}", e))?;

    println!(
        "📋 Skip report written to: {} ({} chromosomes)",
        file_path.display(),
        skipped.len()
    );
    Ok(())
}
