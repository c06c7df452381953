mod formatters;

pub use formatters::{JsonFormatter, JsonLinesFormatter, TextFormatter};

use anyhow::Result;
use cdigest_core::{AlgorithmRegistry, CommonDigests, Digest, to_hex};
use serde::Serialize;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    JsonLines,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-lines" | "jsonl" => Ok(Self::JsonLines),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// One labelled output value, rendered as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub hex: String,
}

/// Everything computed for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestReport {
    pub input: String,
    pub entries: Vec<ReportEntry>,
}

impl DigestReport {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, bytes: &[u8]) -> Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            hex: to_hex(bytes),
        });
        self
    }

    pub fn from_digest(input: impl Into<String>, digest: &Digest) -> Self {
        Self::new(input).with_entry(digest.algorithm().name(), digest.as_bytes())
    }

    pub fn from_common(input: impl Into<String>, digests: &CommonDigests) -> Self {
        digests
            .iter()
            .fold(Self::new(input), |report, (alg, bytes)| {
                report.with_entry(alg.name(), bytes)
            })
    }
}

/// Registry metadata for the `algorithms` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmRow {
    pub name: &'static str,
    pub display_name: &'static str,
    pub output_len: usize,
    pub block_size: usize,
    pub common: bool,
}

impl AlgorithmRow {
    pub fn all() -> Vec<Self> {
        AlgorithmRegistry::global()
            .iter()
            .map(|imp| Self {
                name: imp.id().name(),
                display_name: imp.display_name(),
                output_len: imp.output_len(),
                block_size: imp.block_size(),
                common: imp.id().is_common(),
            })
            .collect()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a single report
    fn format_single(&self, report: &DigestReport) -> Result<String>;

    /// Format a batch of reports
    fn format_batch(&self, reports: &[DigestReport]) -> Result<String> {
        let formatted: Result<Vec<String>> =
            reports.iter().map(|r| self.format_single(r)).collect();

        Ok(formatted?.join("\n"))
    }

    /// Format the algorithm table
    fn format_algorithms(&self, rows: &[AlgorithmRow]) -> Result<String>;
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::JsonLines => Box::new(JsonLinesFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdigest_core::{AlgorithmId, compute_common, one_shot};

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_string("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_string("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_string("jsonl").unwrap(), OutputFormat::JsonLines);
        assert!(OutputFormat::from_string("csv").is_err());
    }

    #[test]
    fn test_report_from_digest_uses_display_hex() {
        let digest = one_shot(AlgorithmId::Sha1, b"abc");
        let report = DigestReport::from_digest("stdin", &digest);

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].label, "sha1");
        assert_eq!(report.entries[0].hex, digest.to_string());
    }

    #[test]
    fn test_report_from_common_keeps_real_lengths() {
        let report = DigestReport::from_common("x", &compute_common(b"x").unwrap());
        let lengths: Vec<usize> = report.entries.iter().map(|e| e.hex.len()).collect();
        assert_eq!(lengths, vec![40, 64]);
    }

    #[test]
    fn test_algorithm_rows_follow_registry_order() {
        let names: Vec<&str> = AlgorithmRow::all().iter().map(|row| row.name).collect();
        assert_eq!(names, AlgorithmRegistry::global().list());
    }
}
