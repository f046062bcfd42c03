//! Classification result views.

use std::io::Write;

use mailguard_core::{BatchItem, BatchSummary, ClassificationResult, EmailRecord};

use super::write_json;
use crate::model::OutputFormat;

/// Result of classifying one piece of text.
pub fn write_result(
    out: &mut impl Write,
    result: &ClassificationResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Text => write_result_text(out, result),
    }
}

/// Result of classifying the record at `index`.
pub fn write_analysis(
    out: &mut impl Write,
    index: usize,
    record: &EmailRecord,
    result: ClassificationResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &BatchItem {
                index,
                record,
                result,
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "Selected Email")?;
            writeln!(out, "Subject: {}", record.subject)?;
            writeln!(out, "Sender: {}", record.sender_or_unknown())?;
            writeln!(out)?;
            writeln!(out, "Analysis Result")?;
            write_result_text(out, &result)
        }
    }
}

/// Flagged records from a batch.
pub fn write_summary(
    out: &mut impl Write,
    summary: &BatchSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Text => {
            writeln!(out, "Batch Analysis Results")?;
            if summary.is_clean() {
                writeln!(out, "No non-compliant emails found.")?;
                return Ok(());
            }

            let highest = summary.highest_priority();
            writeln!(out, "Flagged Emails: {}", summary.flagged_count())?;
            writeln!(out, "Highest Priority: {highest} - {}", highest.label())?;
            for entry in &summary.flagged {
                writeln!(
                    out,
                    "- Index {}: {} - {} (Priority: {})",
                    entry.index, entry.subject, entry.category, entry.priority
                )?;
            }
            Ok(())
        }
    }
}

fn write_result_text(out: &mut impl Write, result: &ClassificationResult) -> anyhow::Result<()> {
    if result.is_compliant() {
        writeln!(out, "Email is Compliant")?;
        writeln!(out, "Category: {}", result.category)?;
        return Ok(());
    }

    writeln!(out, "Non-Compliant Email Detected")?;
    writeln!(out, "Category: {}", result.category)?;
    writeln!(out, "Reason: {}", result.reason)?;
    writeln!(out, "Source Line: {}", result.source_excerpt)?;
    writeln!(
        out,
        "Priority: {} - {} (1=Low, 2=Medium, 3=High)",
        result.priority,
        result.priority.label()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailguard_core::{BatchRunner, CategoryRegistry, Classifier};

    fn classifier() -> Classifier {
        Classifier::standard(&CategoryRegistry::standard()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flagged_result_text() {
        let result = classifier().classify("Please keep this confidential");
        let text = render(|out| write_result(out, &result, OutputFormat::Text));
        assert_eq!(
            text,
            "Non-Compliant Email Detected\n\
             Category: Secrecy Breach\n\
             Reason: Contains confidential information sharing\n\
             Source Line: Please keep this confidential\n\
             Priority: 3 - High (1=Low, 2=Medium, 3=High)\n"
        );
    }

    #[test]
    fn test_compliant_result_text() {
        let result = classifier().classify("Let's discuss the quarterly report");
        let text = render(|out| write_result(out, &result, OutputFormat::Text));
        assert_eq!(text, "Email is Compliant\nCategory: No Issue\n");
    }

    #[test]
    fn test_analysis_json() {
        let record = EmailRecord::new("Tip", Some("b@example.com"), "insider info");
        let result = classifier().classify("insider info");
        let text = render(|out| write_analysis(out, 4, &record, result, OutputFormat::Json));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["index"], 4);
        assert_eq!(value["record"]["subject"], "Tip");
        assert_eq!(value["result"]["category"], "Market Manipulation/Misconduct");
    }

    #[test]
    fn test_summary_text() {
        let classifier = classifier();
        let records = vec![
            EmailRecord::new("Lunch", None, "Pizza?"),
            EmailRecord::new("Favor", None, "a bribe"),
        ];
        let summary = BatchRunner::new(&classifier).summarize(&records).unwrap();
        let text = render(|out| write_summary(out, &summary, OutputFormat::Text));
        assert_eq!(
            text,
            "Batch Analysis Results\n\
             Flagged Emails: 1\n\
             Highest Priority: 3 - High\n\
             - Index 1: Favor - Market Bribery (Priority: 3)\n"
        );
    }

    #[test]
    fn test_low_priority_label() {
        let result = classifier().classify("Read the code of ethics");
        let text = render(|out| write_result(out, &result, OutputFormat::Text));
        assert!(text.ends_with("Priority: 1 - Low (1=Low, 2=Medium, 3=High)\n"));
    }

    #[test]
    fn test_clean_summary_text() {
        let classifier = classifier();
        let records = vec![EmailRecord::new("Lunch", None, "Pizza?")];
        let summary = BatchRunner::new(&classifier).summarize(&records).unwrap();
        let text = render(|out| write_summary(out, &summary, OutputFormat::Text));
        assert!(text.ends_with("No non-compliant emails found.\n"));
    }
}
