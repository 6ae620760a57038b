// csv.rs - CSV file loader for feature tables

use crate::data::feature::{FeatureTable, RawFeature};
use std::path::Path;

/// Required input columns, resolved by header name
const REQUIRED_COLUMNS: [&str; 7] = [
    "gene_id",
    "type",
    "orf_id",
    "gene_name",
    "chromosome",
    "start",
    "stop",
];

/// Resolve required column positions from a header row.
/// Extra columns are ignored; column order is free.
fn resolve_columns(header_parts: &[&str], origin: &str) -> Result<[usize; 7], String> {
    let mut indices = [0usize; 7];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        indices[slot] = header_parts
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("Missing required column '{}' in header of '{}'", name, origin))?;
    }
    Ok(indices)
}

impl FeatureTable {
    /// Load CSV file
    pub fn from_csv(file_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read CSV file '{}': {}", file_path.display(), e))?;
        let table = Self::from_csv_str(&content, &file_path.display().to_string())?;

        println!("✅ CSV loaded: {} rows", table.rows.len());
        Ok(table)
    }

    /// Parse CSV content. `origin` names the source in error messages.
    pub fn from_csv_str(content: &str, origin: &str) -> Result<Self, String> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| format!("Empty CSV file '{}'", origin))?;
        let header_parts: Vec<&str> = header_line
            .split(',')
            .map(|s| s.trim().trim_matches('"'))
            .collect();

        let [gene_id_col, type_col, orf_id_col, gene_name_col, chromosome_col, start_col, stop_col] =
            resolve_columns(&header_parts, origin)?;

        let mut table = FeatureTable::new(origin);

        for (line_num, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(|s| s.trim().trim_matches('"')).collect();
            if parts.len() != header_parts.len() {
                return Err(format!(
                    "CSV line {} of '{}' has {} columns, expected {}",
                    line_num + 2,
                    origin,
                    parts.len(),
                    header_parts.len()
                ));
            }

            table.rows.push(RawFeature {
                gene_id: parts[gene_id_col].to_string(),
                feature_type: parts[type_col].to_string(),
                orf_id: parts[orf_id_col].to_string(),
                gene_name: parts[gene_name_col].to_string(),
                chromosome: parts[chromosome_col].to_string(),
                start: parts[start_col].to_string(),
                stop: parts[stop_col].to_string(),
                line: line_num + 2,
            });
        }

        Ok(table)
    }
}
