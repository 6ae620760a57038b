// tsv.rs - TSV file loader for feature tables

use crate::data::feature::{FeatureTable, RawFeature};
use std::fs::File;
use std::io::{BufRead, BufReader};
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

fn parse_row(
    line: &str,
    line_num: usize,
    expected_cols: usize,
    columns: &[usize; 7],
    origin: &str,
) -> Result<RawFeature, String> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() != expected_cols {
        return Err(format!(
            "Line {} of '{}' has {} columns, expected {}",
            line_num, origin, parts.len(), expected_cols
        ));
    }

    let [gene_id_col, type_col, orf_id_col, gene_name_col, chromosome_col, start_col, stop_col] =
        *columns;

    Ok(RawFeature {
        gene_id: parts[gene_id_col].to_string(),
        feature_type: parts[type_col].to_string(),
        orf_id: parts[orf_id_col].to_string(),
        gene_name: parts[gene_name_col].to_string(),
        chromosome: parts[chromosome_col].to_string(),
        start: parts[start_col].to_string(),
        stop: parts[stop_col].to_string(),
        line: line_num,
    })
}

impl FeatureTable {
    /// Load TSV file
    pub fn from_tsv(file_path: &Path) -> Result<Self, String> {
        let origin = file_path.display().to_string();
        let file = File::open(file_path)
            .map_err(|e| format!("Failed to open TSV file '{}': {}", origin, e))?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| format!("Empty TSV file '{}'", origin))?
            .map_err(|e| format!("Failed to read header of '{}': {}", origin, e))?;

        let header_parts: Vec<&str> = header_line.split('\t').collect();
        let columns = resolve_columns(&header_parts, &origin)?;

        let mut table = FeatureTable::new(&origin);

        for (line_num, line) in lines.enumerate() {
            let line = line
                .map_err(|e| format!("Failed to read line {} of '{}': {}", line_num + 2, origin, e))?;
            if line.trim().is_empty() {
                continue;
            }
            table
                .rows
                .push(parse_row(&line, line_num + 2, header_parts.len(), &columns, &origin)?);
        }

        println!("✅ TSV loaded: {} rows", table.rows.len());
        Ok(table)
    }

    /// Parse TSV content. `origin` names the source in error messages.
    pub fn from_tsv_str(content: &str, origin: &str) -> Result<Self, String> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| format!("Empty TSV file '{}'", origin))?;

        let header_parts: Vec<&str> = header_line.split('\t').collect();
        let columns = resolve_columns(&header_parts, origin)?;

        let mut table = FeatureTable::new(origin);

        for (line_num, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            table
                .rows
                .push(parse_row(line, line_num + 2, header_parts.len(), &columns, origin)?);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::feature::FeatureTable;

    #[test]
    fn test_tsv_basic_load() {
        let content = "gene_id\ttype\torf_id\tgene_name\tchromosome\tstart\tstop\n\
                       G1\tORF\tO1\tACT1\tI\t10\t50\n\
                       C1\tcentromere\t\t\tI\t100\t150\n";
        let table = FeatureTable::from_tsv_str(content, "fixture.tsv").unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].gene_name, "ACT1");
        assert_eq!(table.rows[1].feature_type, "centromere");
    }

    #[test]
    fn test_tsv_ragged_row_fails() {
        let content = "gene_id\ttype\torf_id\tgene_name\tchromosome\tstart\tstop\n\
                       G1\tORF\tO1\tACT1\tI\t10\n";
        let err = FeatureTable::from_tsv_str(content, "fixture.tsv").unwrap_err();
        assert!(err.contains("Line 2"));
    }
}
