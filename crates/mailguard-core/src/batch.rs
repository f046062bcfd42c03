//! Sequential batch classification.
//!
//! [`BatchRunner::run`] yields one item per record, in input order, and
//! holds no state between runs. A record without a body yields
//! [`Error::MissingField`]; [`BatchRunner::collect`] and
//! [`BatchRunner::summarize`] abort the whole batch on it rather than skip
//! the record.

use std::iter::Enumerate;
use std::slice;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::category::Priority;
use crate::classifier::{ClassificationResult, Classifier};
use crate::error::{Error, Result};
use crate::record::EmailRecord;

/// One classified record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem<'r> {
    /// Position of the record in the input.
    pub index: usize,
    /// The input record.
    pub record: &'r EmailRecord,
    /// Classification of the record's body.
    pub result: ClassificationResult,
}

/// Summary line for one flagged record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedEntry {
    /// Position of the record in the input.
    pub index: usize,
    /// Subject of the record.
    pub subject: String,
    /// Matched category.
    pub category: String,
    /// Priority of the matched category.
    pub priority: Priority,
}

impl From<&BatchItem<'_>> for FlaggedEntry {
    fn from(item: &BatchItem<'_>) -> Self {
        Self {
            index: item.index,
            subject: item.record.subject.clone(),
            category: item.result.category.clone(),
            priority: item.result.priority,
        }
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Number of records classified.
    pub total: usize,
    /// Flagged records in input order.
    pub flagged: Vec<FlaggedEntry>,
    /// When the batch finished.
    pub generated_at: DateTime<Utc>,
}

impl BatchSummary {
    /// Number of flagged records.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// Check if no record was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Highest priority among flagged records.
    #[must_use]
    pub fn highest_priority(&self) -> Priority {
        self.flagged
            .iter()
            .map(|f| f.priority)
            .max()
            .unwrap_or(Priority::NONE)
    }
}

/// Lazy iterator over a batch run.
#[derive(Debug, Clone)]
pub struct BatchIter<'c, 'r> {
    classifier: &'c Classifier,
    records: Enumerate<slice::Iter<'r, EmailRecord>>,
}

impl<'r> Iterator for BatchIter<'_, 'r> {
    type Item = Result<BatchItem<'r>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, record) = self.records.next()?;

        let item = record.require_body(index).map(|body| {
            let result = self.classifier.classify(body);
            debug!(index, category = %result.category, "Classified record");
            BatchItem {
                index,
                record,
                result,
            }
        });

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for BatchIter<'_, '_> {}

/// Applies a [`Classifier`] to many records.
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner<'c> {
    classifier: &'c Classifier,
}

impl<'c> BatchRunner<'c> {
    /// Create a runner around a classifier.
    #[must_use]
    pub const fn new(classifier: &'c Classifier) -> Self {
        Self { classifier }
    }

    /// Start a fresh lazy run over `records`.
    #[must_use]
    pub fn run<'r>(&self, records: &'r [EmailRecord]) -> BatchIter<'c, 'r> {
        BatchIter {
            classifier: self.classifier,
            records: records.iter().enumerate(),
        }
    }

    /// Classify every record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for the first record without a body;
    /// no partial results are returned.
    pub fn collect<'r>(&self, records: &'r [EmailRecord]) -> Result<Vec<BatchItem<'r>>> {
        self.run(records)
            .map(|item| item.inspect_err(log_abort))
            .collect()
    }

    /// Classify every record and keep only the flagged ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for the first record without a body.
    pub fn summarize(&self, records: &[EmailRecord]) -> Result<BatchSummary> {
        let mut total = 0;
        let mut flagged = Vec::new();

        for item in self.run(records) {
            let item = item.inspect_err(log_abort)?;
            total += 1;
            if item.result.flagged {
                flagged.push(FlaggedEntry::from(&item));
            }
        }

        info!(total, flagged = flagged.len(), "Batch complete");

        Ok(BatchSummary {
            total,
            flagged,
            generated_at: Utc::now(),
        })
    }
}

fn log_abort(err: &Error) {
    warn!(%err, "Aborting batch");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryRegistry;

    fn classifier() -> Classifier {
        Classifier::standard(&CategoryRegistry::standard()).unwrap()
    }

    fn records() -> Vec<EmailRecord> {
        vec![
            EmailRecord::new("Lunch", Some("a@example.com"), "Pizza on Friday?"),
            EmailRecord::new("Tip", Some("b@example.com"), "Keep this confidential"),
            EmailRecord::new("Report", None, "Let's discuss the quarterly report"),
            EmailRecord::new("Favor", None, "A small kickback for you"),
        ]
    }

    #[test]
    fn test_run_preserves_order() {
        let classifier = classifier();
        let records = records();
        let items: Vec<_> = BatchRunner::new(&classifier)
            .run(&records)
            .map(Result::unwrap)
            .collect();

        let indices: Vec<_> = items.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(items[1].result.category, "Secrecy Breach");
        assert_eq!(items[3].result.category, "Market Bribery");
        assert!(std::ptr::eq(items[2].record, &records[2]));
    }

    #[test]
    fn test_run_is_exact_size() {
        let classifier = classifier();
        let records = records();
        assert_eq!(BatchRunner::new(&classifier).run(&records).len(), 4);
    }

    #[test]
    fn test_run_is_lazy() {
        let classifier = classifier();
        let mut records = records();
        records.push(EmailRecord::default());

        let mut iter = BatchRunner::new(&classifier).run(&records);
        assert!(iter.next().unwrap().is_ok());
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn test_missing_body_surfaces() {
        let classifier = classifier();
        let mut records = records();
        records.insert(
            2,
            EmailRecord {
                subject: "Broken".to_string(),
                sender: None,
                body: None,
            },
        );

        let items: Vec<_> = BatchRunner::new(&classifier).run(&records).collect();
        assert_eq!(items.len(), 5);
        assert!(matches!(items[2], Err(Error::MissingField { index: 2, .. })));
    }

    #[test]
    fn test_collect_aborts_on_missing_body() {
        let classifier = classifier();
        let mut records = records();
        records[1].body = None;

        let err = BatchRunner::new(&classifier).collect(&records).unwrap_err();
        assert!(matches!(err, Error::MissingField { index: 1, .. }));
    }

    #[test]
    fn test_summarize() {
        let classifier = classifier();
        let summary = BatchRunner::new(&classifier).summarize(&records()).unwrap();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.flagged_count(), 2);
        assert!(!summary.is_clean());
        assert_eq!(summary.highest_priority(), Priority::HIGH);
        assert_eq!(
            summary.flagged[0],
            FlaggedEntry {
                index: 1,
                subject: "Tip".to_string(),
                category: "Secrecy Breach".to_string(),
                priority: Priority::HIGH,
            }
        );
        assert_eq!(summary.flagged[1].index, 3);
    }

    #[test]
    fn test_summarize_clean() {
        let classifier = classifier();
        let records = vec![EmailRecord::new("Hi", None, "See you soon")];
        let summary = BatchRunner::new(&classifier).summarize(&records).unwrap();
        assert!(summary.is_clean());
        assert_eq!(summary.highest_priority(), Priority::NONE);
    }

    #[test]
    fn test_summarize_empty() {
        let classifier = classifier();
        let summary = BatchRunner::new(&classifier).summarize(&[]).unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.is_clean());
    }
}
