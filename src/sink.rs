// src/sink.rs - Durable CSV output shared by checkpoint and final writes
use std::path::{Path, PathBuf};

use tracing::info;

use crate::models::CompanyRecord;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Column headers for the exported CSV, in output order.
pub const EXPORT_HEADER: [&str; 5] = ["Company Name", "Phone", "Email", "Website", "Address"];

/// Writes record batches to one CSV path. The header schema is fixed at
/// construction; there is no ambient writer state shared between callers.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
    header: Vec<String>,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>, header: &[&str]) -> Self {
        Self {
            path: path.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole file. Every invocation replaces prior content, so
    /// the final merged write supersedes the per-source checkpoints.
    pub fn write_batch(&self, records: &[CompanyRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&self.header)?;
        for record in records {
            writer.write_record(&[
                record.name.as_str(),
                record.phone.as_str(),
                record.email.as_str(),
                record.website.as_str(),
                record.address.as_str(),
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roofing_leads_{}_{}", std::process::id(), name))
    }

    fn record(name: &str, phone: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            ..CompanyRecord::default()
        }
    }

    #[test]
    fn writes_header_and_rows_with_empty_cells() {
        let path = temp_csv("header_and_rows.csv");
        let sink = CsvSink::new(&path, &EXPORT_HEADER);

        sink.write_batch(&[record("Ace Roofing", "305-555-0100")])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Company Name,Phone,Email,Website,Address"));
        assert_eq!(lines.next(), Some("Ace Roofing,305-555-0100,,,"));
        assert_eq!(lines.next(), None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn each_write_replaces_prior_content() {
        let path = temp_csv("replaces_prior.csv");
        let sink = CsvSink::new(&path, &EXPORT_HEADER);

        sink.write_batch(&[
            record("Ace Roofing", "305-555-0100"),
            record("Sunshine Roofs", "305-555-0200"),
        ])
        .unwrap();
        sink.write_batch(&[record("Ace Roofing", "305-555-0100")])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        std::fs::remove_file(&path).ok();
    }
}
