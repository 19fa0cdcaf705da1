//! Report writing functionality

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::mover::MovedFile;
use crate::core::pipeline::RunSummary;

/// Report file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Line printed at the end of every run
pub fn summary_line(summary: &RunSummary) -> String {
    format!("Successfully moved {} files", summary.moved_count())
}

/// Print the moved-file count to stdout
pub fn print_summary(summary: &RunSummary) {
    println!("{}", summary_line(summary));
}

fn moved_by_digest(moved: &[MovedFile]) -> BTreeMap<&str, Vec<&MovedFile>> {
    let mut groups: BTreeMap<&str, Vec<&MovedFile>> = BTreeMap::new();
    for file in moved {
        groups.entry(file.digest.as_str()).or_default().push(file);
    }
    groups
}

/// Write a human-readable report of a run
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `summary` - Result of the run
pub fn write_report(output_path: &Path, summary: &RunSummary) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);

    let now = std::time::SystemTime::now();
    writeln!(file, "Duplicate Move Report")?;
    writeln!(file, "=====================")?;
    writeln!(file, "Generated: {:?}", now)?;
    writeln!(file)?;

    writeln!(file, "Summary Statistics:")?;
    writeln!(file, "-------------------")?;
    writeln!(file, "  Files scanned: {}", summary.scanned)?;
    writeln!(file, "  Files hashed: {}", summary.hashed)?;
    writeln!(file, "  Unreadable files skipped: {}", summary.skipped())?;
    writeln!(file, "  Duplicate groups: {}", summary.duplicate_groups)?;
    writeln!(file, "  Files moved: {}", summary.moved_count())?;
    writeln!(file, "  Move failures: {}", summary.failures.len())?;
    writeln!(file)?;

    if !summary.moved.is_empty() {
        writeln!(file, "Moved Files:")?;
        writeln!(file, "------------")?;
        for (idx, (digest, files)) in moved_by_digest(&summary.moved).iter().enumerate() {
            writeln!(file, "  Group {} (Hash: {}):", idx + 1, digest)?;
            for moved in files {
                writeln!(
                    file,
                    "    {} -> {} ({} bytes)",
                    moved.from.display(),
                    moved.to.display(),
                    moved.size
                )?;
            }
            writeln!(file)?;
        }
    }

    if !summary.failures.is_empty() {
        writeln!(file, "Failed Moves:")?;
        writeln!(file, "-------------")?;
        for failure in &summary.failures {
            writeln!(
                file,
                "  {} -> {}: {}",
                failure.path.display(),
                failure.destination.display(),
                failure.error
            )?;
        }
    }

    file.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    path: &'a Path,
    destination: &'a Path,
    error: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source_files: usize,
    hashed_files: usize,
    skipped_files: usize,
    duplicate_groups: usize,
    moved: &'a [MovedFile],
    failures: Vec<JsonFailure<'a>>,
}

/// Write the run as a JSON document
pub fn write_json_report(output_path: &Path, summary: &RunSummary) -> Result<()> {
    let report = JsonReport {
        source_files: summary.scanned,
        hashed_files: summary.hashed,
        skipped_files: summary.skipped(),
        duplicate_groups: summary.duplicate_groups,
        moved: &summary.moved,
        failures: summary
            .failures
            .iter()
            .map(|f| JsonFailure {
                path: &f.path,
                destination: &f.destination,
                error: f.error.to_string(),
            })
            .collect(),
    };

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, &report)
        .context("Failed to write JSON report")?;
    writer.flush()?;
    Ok(())
}

/// Write a report in the requested format
pub fn write_report_as(output_path: &Path, summary: &RunSummary, format: ReportFormat) -> Result<()> {
    let written = match format {
        ReportFormat::Text => write_report(output_path, summary),
        ReportFormat::Json => write_json_report(output_path, summary),
    };
    written.with_context(|| format!("Failed to write report {}", output_path.display()))
}
