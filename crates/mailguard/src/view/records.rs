//! Dataset and record views.

use std::io::Write;

use mailguard_core::{Dataset, EmailRecord};
use serde::Serialize;

use super::write_json;
use crate::model::OutputFormat;

#[derive(Serialize)]
struct Listed<'a> {
    index: usize,
    subject: &'a str,
    sender: &'a str,
}

#[derive(Serialize)]
struct Preview<'a> {
    columns: &'a [String],
    total: usize,
    rows: Vec<Listed<'a>>,
}

fn listed(dataset: &Dataset, limit: usize) -> Vec<Listed<'_>> {
    dataset
        .head(limit)
        .iter()
        .enumerate()
        .map(|(index, record)| Listed {
            index,
            subject: &record.subject,
            sender: record.sender_or_unknown(),
        })
        .collect()
}

/// Columns and the first `rows` records.
pub fn write_preview(
    out: &mut impl Write,
    dataset: &Dataset,
    rows: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &Preview {
                columns: dataset.columns(),
                total: dataset.len(),
                rows: listed(dataset, rows),
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "Data Preview:")?;
            writeln!(out, "Columns: {}", dataset.columns().join(", "))?;
            writeln!(out, "Records: {}", dataset.len())?;
            for (index, record) in dataset.head(rows).iter().enumerate() {
                writeln!(out, "{}", record.label(index))?;
                if let Some(body) = &record.body {
                    writeln!(out, "    {}", first_line(body))?;
                }
            }
            Ok(())
        }
    }
}

/// One line per record, for picking an email to analyze.
pub fn write_list(out: &mut impl Write, dataset: &Dataset, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &listed(dataset, dataset.len())),
        OutputFormat::Text => {
            for (index, record) in dataset.records().iter().enumerate() {
                writeln!(out, "{}", record.label(index))?;
            }
            Ok(())
        }
    }
}

/// Full view of a single record.
pub fn write_record(
    out: &mut impl Write,
    record: &EmailRecord,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, record),
        OutputFormat::Text => {
            writeln!(out, "Subject: {}", record.subject)?;
            writeln!(out, "Sender: {}", record.sender_or_unknown())?;
            writeln!(out, "Body: {}", record.body.as_deref().unwrap_or(""))?;
            Ok(())
        }
    }
}

fn first_line(body: &str) -> &str {
    body.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            EmailRecord::new("Hello", Some("a@example.com"), "Hi there\nsecond line"),
            EmailRecord::new("Deal", None, "Keep it quiet"),
        ])
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_text() {
        let text = render(|out| write_list(out, &dataset(), OutputFormat::Text));
        assert_eq!(text, "0: Hello - a@example.com\n1: Deal - Unknown\n");
    }

    #[test]
    fn test_list_json() {
        let text = render(|out| write_list(out, &dataset(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["sender"], "Unknown");
        assert_eq!(value[0]["index"], 0);
    }

    #[test]
    fn test_preview_limits_rows() {
        let text = render(|out| write_preview(out, &dataset(), 1, OutputFormat::Text));
        assert!(text.contains("Records: 2"));
        assert!(text.contains("0: Hello - a@example.com"));
        assert!(text.contains("    Hi there\n"));
        assert!(!text.contains("second line"));
        assert!(!text.contains("1: Deal"));
    }

    #[test]
    fn test_record_text() {
        let dataset = dataset();
        let text = render(|out| write_record(out, dataset.get(1).unwrap(), OutputFormat::Text));
        assert_eq!(text, "Subject: Deal\nSender: Unknown\nBody: Keep it quiet\n");
    }
}
