//! Report writers for license inventory results.
//!
//! - [`ReportWriter`] — streams one CSV row per processed line and
//!   accumulates records for a single bulk JSON write at the end of the run.
//! - [`terminal`] — colored summary printed after the run; respects
//!   `--verbose` / `--quiet`.

pub mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexMap;

use crate::models::{LicenseRecord, ReportSchema};

const FULL_HEADER: [&str; 8] = [
    "Repository",
    "Licenses",
    "Name",
    "Publisher",
    "Version",
    "Copyright",
    "License File",
    "License Text",
];

const PROCESSED_HEADER: [&str; 4] = [
    "Repository",
    "License Name",
    "License URL",
    "License Contents",
];

/// Accumulates per-repository results and writes both report formats.
///
/// The CSV writer is open for the whole run; records are also kept in an
/// insertion-ordered map keyed by the original input line, so duplicate
/// lines overwrite the prior record (last write wins) while still producing
/// one CSV row each.
pub struct ReportWriter {
    schema: ReportSchema,
    csv: csv::Writer<File>,
    csv_path: PathBuf,
    json_path: PathBuf,
    records: IndexMap<String, LicenseRecord>,
}

impl ReportWriter {
    /// Create the CSV output file next to `input` and write the header row.
    ///
    /// The basename is the input filename with its extension stripped,
    /// suffixed `-report.csv` / `-report.json` for the full schema and
    /// `-processed.csv` for the processed one.
    pub fn create(input: &Path, schema: ReportSchema) -> Result<Self> {
        let stem = input.with_extension("");
        let suffix = match schema {
            ReportSchema::Full => "-report.csv",
            ReportSchema::Processed => "-processed.csv",
        };
        let csv_path = PathBuf::from(format!("{}{}", stem.display(), suffix));
        let json_path = PathBuf::from(format!("{}-report.json", stem.display()));

        let mut csv = csv::Writer::from_path(&csv_path)
            .with_context(|| format!("failed to create {}", csv_path.display()))?;

        match schema {
            ReportSchema::Full => csv.write_record(FULL_HEADER),
            ReportSchema::Processed => csv.write_record(PROCESSED_HEADER),
        }
        .with_context(|| format!("failed to write header to {}", csv_path.display()))?;

        Ok(ReportWriter {
            schema,
            csv,
            csv_path,
            json_path,
            records: IndexMap::new(),
        })
    }

    /// Stream one CSV row and remember the record for the JSON report.
    ///
    /// A failed row write is recoverable: it is logged and the run goes on.
    pub fn record(&mut self, record: LicenseRecord) {
        let row = match self.schema {
            ReportSchema::Full => vec![
                record.repository.clone(),
                record.licenses.clone(),
                record.name.clone(),
                record.publisher.clone(),
                record.version.clone(),
                record.copyright.clone(),
                record.license_file.clone(),
                record.license_text.clone(),
            ],
            ReportSchema::Processed => vec![
                record.repository.clone(),
                record.licenses.clone(),
                record.license_file.clone(),
                record.license_text.clone(),
            ],
        };

        if let Err(err) = self.csv.write_record(&row) {
            eprintln!(
                "  {} failed to write row for {}: {}",
                "✗".red(),
                record.repository,
                err
            );
        }

        self.records.insert(record.repository.clone(), record);
    }

    /// The accumulated records, in first-seen order.
    pub fn records(&self) -> &IndexMap<String, LicenseRecord> {
        &self.records
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Flush the CSV and, for the full schema, write the JSON mapping.
    ///
    /// Returns the path of the JSON report when one was written. All
    /// failures here are fatal to the run.
    pub fn finish(&mut self) -> Result<Option<PathBuf>> {
        self.csv
            .flush()
            .with_context(|| format!("failed to write {}", self.csv_path.display()))?;

        if self.schema == ReportSchema::Processed {
            return Ok(None);
        }

        let json = serde_json::to_string_pretty(&self.records)
            .context("failed to serialize the JSON report")?;
        std::fs::write(&self.json_path, json)
            .with_context(|| format!("failed to write {}", self.json_path.display()))?;

        Ok(Some(self.json_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepositoryReference;

    fn sample_record(repository: &str, licenses: &str) -> LicenseRecord {
        let reference = RepositoryReference {
            host: "github.com".to_string(),
            owner: "acme".to_string(),
            name: "widget".to_string(),
        };
        let mut record = LicenseRecord::new(repository, &reference);
        record.licenses = licenses.to_string();
        record
    }

    #[test]
    fn test_full_schema_writes_csv_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deps.txt");

        let mut writer = ReportWriter::create(&input, ReportSchema::Full).unwrap();
        writer.record(sample_record("github.com/acme/widget", "MIT License"));
        let json_path = writer.finish().unwrap().unwrap();

        let csv_content = std::fs::read_to_string(dir.path().join("deps-report.csv")).unwrap();
        let mut lines = csv_content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Repository,Licenses,Name,Publisher,Version,Copyright,License File,License Text"
        );
        assert!(lines.next().unwrap().starts_with("github.com/acme/widget,MIT License"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(
            json["github.com/acme/widget"]["licenses"],
            "MIT License"
        );
        assert_eq!(json["github.com/acme/widget"]["publisher"], "acme");
        assert_eq!(json["github.com/acme/widget"]["licenseText"], "");
    }

    #[test]
    fn test_processed_schema_writes_four_columns_and_no_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deps.txt");

        let mut writer = ReportWriter::create(&input, ReportSchema::Processed).unwrap();
        writer.record(sample_record("github.com/acme/widget", "Apache License 2.0"));
        assert_eq!(writer.finish().unwrap(), None);

        let csv_content =
            std::fs::read_to_string(dir.path().join("deps-processed.csv")).unwrap();
        let mut lines = csv_content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Repository,License Name,License URL,License Contents"
        );
        assert_eq!(
            lines.next().unwrap(),
            "github.com/acme/widget,Apache License 2.0,,"
        );
        assert!(!dir.path().join("deps-report.json").exists());
    }

    #[test]
    fn test_duplicate_lines_last_write_wins_in_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("deps.txt");

        let mut writer = ReportWriter::create(&input, ReportSchema::Full).unwrap();
        writer.record(sample_record("github.com/acme/widget", "MIT License"));
        writer.record(sample_record("github.com/acme/other", "Unknown"));
        writer.record(sample_record("github.com/acme/widget", "Apache License 2.0"));
        writer.finish().unwrap();

        // One CSV row per processed line.
        let csv_content = std::fs::read_to_string(dir.path().join("deps-report.csv")).unwrap();
        assert_eq!(csv_content.lines().count(), 4);

        // One JSON entry per key, last value, first-seen position.
        assert_eq!(writer.records().len(), 2);
        let (first_key, first_record) = writer.records().get_index(0).unwrap();
        assert_eq!(first_key, "github.com/acme/widget");
        assert_eq!(first_record.licenses, "Apache License 2.0");
    }

    #[test]
    fn test_basename_strips_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("licenses.list");

        let writer = ReportWriter::create(&input, ReportSchema::Full).unwrap();
        assert!(writer
            .csv_path()
            .to_string_lossy()
            .ends_with("licenses-report.csv"));
    }
}
