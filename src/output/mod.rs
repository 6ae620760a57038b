// mod.rs - Partition output writers

pub mod report;

use crate::data::feature::GenePair;
use crate::data::traits::TableSink;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use report::write_skip_report;

/// Output file format for partition files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("Unsupported output format: {}. Use: csv, tsv", s)),
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    fn separator(&self) -> char {
        match self {
            OutputFormat::Csv => ',',
            OutputFormat::Tsv => '\t',
        }
    }
}

/// Column header shared by every partition file
const PAIR_COLUMNS: [&str; 9] = [
    "chromosome",
    "arm",
    "gene_id_a",
    "gene_id_b",
    "orf_id_a",
    "orf_id_b",
    "gene_name_a",
    "gene_name_b",
    "distance",
];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent).map_err(|e| {
            format!("Failed to create parent directory '{}': {}", parent.display(), e)
        })?;
    }
    Ok(())
}

/// Write one partition of pair rows to a delimited file with comment headers
pub fn write_pairs(
    file_path: &Path,
    format: OutputFormat,
    pairs: &[GenePair],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;
    let mut writer = BufWriter::new(file);
    let sep = format.separator();

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# armdist v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write column header
    let header: Vec<&str> = PAIR_COLUMNS.to_vec();
    writeln!(writer, "{}", header.join(&sep.to_string()))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write pair rows
    for pair in pairs {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            pair.chromosome,
            pair.arm,
            pair.gene_id_a,
            pair.gene_id_b,
            pair.orf_id_a,
            pair.orf_id_b,
            pair.gene_name_a,
            pair.gene_name_b,
            pair.distance,
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Directory-backed persist collaborator: one file per partition,
/// named `<destination_key>.<ext>` inside the output directory.
#[derive(Debug)]
pub struct DirectorySink {
    output_dir: PathBuf,
    format: OutputFormat,
    command_line: String,
}

impl DirectorySink {
    pub fn new(output_dir: &Path, format: OutputFormat, command_line: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            format,
            command_line: command_line.to_string(),
        }
    }

    /// File path a destination key maps to
    pub fn partition_path(&self, destination_key: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", destination_key, self.format.extension()))
    }
}

impl TableSink for DirectorySink {
    fn persist(&self, pairs: &[GenePair], destination_key: &str) -> Result<(), String> {
        let path = self.partition_path(destination_key);
        write_pairs(&path, self.format, pairs, &self.command_line)?;
        println!("✅ Partition {} written to: {} ({} pairs)", destination_key, path.display(), pairs.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
