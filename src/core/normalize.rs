// normalize.rs - Feature normalization

use crate::data::feature::{Feature, FeatureKind, FeatureTable, RawFeature};

/// Parse one coordinate field of a retained row
fn parse_coordinate(value: &str, column: &str, row: &RawFeature, origin: &str) -> Result<i64, String> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Err(format!(
            "Missing '{}' coordinate for feature '{}' at line {} of '{}'",
            column, row.gene_id, row.line, origin
        ));
    }
    cleaned.parse::<i64>().map_err(|_| {
        format!(
            "Invalid '{}' coordinate '{}' for feature '{}' at line {} of '{}'",
            column, cleaned, row.gene_id, row.line, origin
        )
    })
}

/// Normalize a raw feature table:
/// - retain only ORF and centromere rows (the type filter runs first, so
///   discarded feature types may carry unparseable coordinates)
/// - resolve `gene_name`, falling back to `orf_id` when absent
/// - order coordinates so `min <= max` regardless of strand
pub fn normalize_features(table: &FeatureTable) -> Result<Vec<Feature>, String> {
    let mut features = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let kind = match FeatureKind::from_type_str(&row.feature_type) {
            Some(kind) => kind,
            None => continue,
        };

        let start = parse_coordinate(&row.start, "start", row, &table.origin)?;
        let stop = parse_coordinate(&row.stop, "stop", row, &table.origin)?;

        let gene_name = if row.gene_name.is_empty() {
            row.orf_id.clone()
        } else {
            row.gene_name.clone()
        };

        features.push(Feature {
            gene_id: row.gene_id.clone(),
            orf_id: row.orf_id.clone(),
            gene_name,
            chromosome: row.chromosome.clone(),
            kind,
            min: start.min(stop),
            max: start.max(stop),
        });
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(feature_type: &str, gene_name: &str, start: &str, stop: &str) -> RawFeature {
        RawFeature {
            gene_id: "G1".to_string(),
            feature_type: feature_type.to_string(),
            orf_id: "YAL001C".to_string(),
            gene_name: gene_name.to_string(),
            chromosome: "I".to_string(),
            start: start.to_string(),
            stop: stop.to_string(),
            line: 2,
        }
    }

    fn table(rows: Vec<RawFeature>) -> FeatureTable {
        let mut table = FeatureTable::new("fixture");
        table.rows = rows;
        table
    }

    #[test]
    fn test_type_filter_retains_orf_and_centromere() {
        let features = normalize_features(&table(vec![
            row("ORF", "ACT1", "10", "50"),
            row("tRNA", "", "1", "2"),
            row("centromere", "", "100", "150"),
            row("long_terminal_repeat", "", "", ""), // bad coords on discarded type are fine
        ]))
        .unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].kind, FeatureKind::Orf);
        assert_eq!(features[1].kind, FeatureKind::Centromere);
    }

    #[test]
    fn test_gene_name_falls_back_to_orf_id() {
        let features = normalize_features(&table(vec![
            row("ORF", "ACT1", "10", "50"),
            row("ORF", "", "10", "50"),
        ]))
        .unwrap();

        assert_eq!(features[0].gene_name, "ACT1");
        assert_eq!(features[1].gene_name, "YAL001C");
    }

    #[test]
    fn test_coordinates_ordered_regardless_of_strand() {
        // Crick-strand feature: start > stop in the raw table
        let features = normalize_features(&table(vec![row("ORF", "ACT1", "50", "10")])).unwrap();
        assert_eq!(features[0].min, 10);
        assert_eq!(features[0].max, 50);
        assert!(features.iter().all(|f| f.min <= f.max));
    }

    #[test]
    fn test_missing_coordinate_fails_with_line() {
        let err = normalize_features(&table(vec![row("ORF", "ACT1", "", "50")])).unwrap_err();
        assert!(err.contains("Missing 'start' coordinate"));
        assert!(err.contains("line 2"));
    }

    #[test]
    fn test_non_numeric_coordinate_fails_with_value() {
        let err = normalize_features(&table(vec![row("centromere", "", "10", "x150")])).unwrap_err();
        assert!(err.contains("Invalid 'stop' coordinate 'x150'"));
        assert!(err.contains("'G1'"));
    }
}
