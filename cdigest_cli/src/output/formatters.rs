use super::{AlgorithmRow, DigestReport, OutputFormatter};
use anyhow::Result;
use colored::*;
use serde_json::{Map, Value, json};

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_single(&self, report: &DigestReport) -> Result<String> {
        let lines: Vec<String> = report
            .entries
            .iter()
            .map(|entry| {
                let label = self.colorize(&entry.label, |s| s.yellow());
                let hex = self.colorize(&entry.hex, |s| s.cyan());
                format!("{label} ({}): {hex}", report.input)
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn format_algorithms(&self, rows: &[AlgorithmRow]) -> Result<String> {
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                let name = self.colorize(&format!("{:<8}", row.name), |s| s.yellow());
                let marker = if row.common { "  common" } else { "" };
                format!(
                    "{name}  {:<8}  {:>3} bytes  block {:>3}{marker}",
                    row.display_name, row.output_len, row.block_size
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn report_value(report: &DigestReport) -> Value {
        let digests: Map<String, Value> = report
            .entries
            .iter()
            .map(|entry| (entry.label.clone(), json!(entry.hex)))
            .collect();

        json!({
            "input": report.input,
            "digests": digests,
        })
    }

    fn render(&self, value: &Value) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_single(&self, report: &DigestReport) -> Result<String> {
        self.render(&Self::report_value(report))
    }

    fn format_batch(&self, reports: &[DigestReport]) -> Result<String> {
        if let [single] = reports {
            return self.format_single(single);
        }
        let values: Vec<Value> = reports.iter().map(Self::report_value).collect();
        self.render(&Value::Array(values))
    }

    fn format_algorithms(&self, rows: &[AlgorithmRow]) -> Result<String> {
        self.render(&serde_json::to_value(rows)?)
    }
}

/// JSON Lines formatter for streaming output
pub struct JsonLinesFormatter;

impl Default for JsonLinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonLinesFormatter {
    fn format_single(&self, report: &DigestReport) -> Result<String> {
        JsonFormatter::new(false).format_single(report)
    }

    fn format_algorithms(&self, rows: &[AlgorithmRow]) -> Result<String> {
        let lines: Result<Vec<String>> = rows
            .iter()
            .map(|row| Ok(serde_json::to_string(row)?))
            .collect();

        Ok(lines?.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DigestReport {
        DigestReport::new("notes.txt")
            .with_entry("sha1", &[0xab; 20])
            .with_entry("sha256", &[0x01; 32])
    }

    #[test]
    fn test_text_without_color() {
        let text = TextFormatter::new(false).format_single(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("sha1 (notes.txt): {}", "ab".repeat(20)));
        assert!(lines[1].starts_with("sha256 (notes.txt): 0101"));
    }

    #[test]
    fn test_json_single_is_an_object() {
        let out = JsonFormatter::new(true).format_batch(&[sample()]).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["input"], "notes.txt");
        assert_eq!(value["digests"]["sha1"], "ab".repeat(20));
    }

    #[test]
    fn test_json_batch_is_an_array() {
        let out = JsonFormatter::new(false)
            .format_batch(&[sample(), sample()])
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_json_lines_one_object_per_line() {
        let out = JsonLinesFormatter::new()
            .format_batch(&[sample(), sample()])
            .unwrap();
        for line in out.lines() {
            let value: Value = serde_json::from_str(line).unwrap();
            assert!(value["digests"].is_object());
        }
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_algorithm_table_lists_every_row() {
        let rows = AlgorithmRow::all();
        let text = TextFormatter::new(false).format_algorithms(&rows).unwrap();
        assert_eq!(text.lines().count(), rows.len());
        assert!(text.contains("SHA3-512"));

        let json = JsonFormatter::new(false).format_algorithms(&rows).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "sha1");
        assert_eq!(value[0]["output_len"], 20);
    }
}
