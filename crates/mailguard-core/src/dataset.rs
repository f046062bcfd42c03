//! Tabular email input.
//!
//! Loads delimited text with a header row. The `body` column is required;
//! `subject` and `sender` are optional. Rows may be ragged, and cells that
//! are not valid UTF-8 are decoded lossily.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::EmailRecord;

/// Required column holding the message body.
pub const BODY_COLUMN: &str = "body";
/// Optional column holding the subject line.
pub const SUBJECT_COLUMN: &str = "subject";
/// Optional column holding the sender.
pub const SENDER_COLUMN: &str = "sender";

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Layout {
    body: usize,
    subject: Option<usize>,
    sender: Option<usize>,
}

impl Layout {
    /// Column names arrive already trimmed, so " body " in a header counts
    /// as `body`. Matching is otherwise exact and case-sensitive.
    fn resolve(columns: &[String]) -> Result<Self> {
        let find = |name: &str| columns.iter().position(|c| c == name);

        let body = find(BODY_COLUMN).ok_or_else(|| Error::MissingColumn {
            column: BODY_COLUMN.to_string(),
        })?;

        Ok(Self {
            body,
            subject: find(SUBJECT_COLUMN),
            sender: find(SENDER_COLUMN),
        })
    }

    fn record(&self, row: &ByteRecord) -> EmailRecord {
        EmailRecord {
            subject: self
                .subject
                .and_then(|i| cell(row, i))
                .unwrap_or_default(),
            sender: self
                .sender
                .and_then(|i| cell(row, i))
                .filter(|s| !s.is_empty()),
            body: cell(row, self.body),
        }
    }
}

fn cell(row: &ByteRecord, index: usize) -> Option<String> {
    row.get(index)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

/// An in-memory set of email records loaded from one source.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<EmailRecord>,
}

impl Dataset {
    /// Load a dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid delimited
    /// text, or has no `body` column.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(path = %path.display(), records = dataset.len(), "Loaded dataset");
        Ok(dataset)
    }

    /// Load a dataset from any reader.
    ///
    /// The header is checked before any row is read, so a missing `body`
    /// column fails without partial results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the header has no `body` column
    /// and [`Error::Csv`] if the input is malformed.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let columns: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();
        debug!(?columns, "Parsed header");

        let layout = Layout::resolve(&columns)?;

        let mut records = Vec::new();
        for row in reader.byte_records() {
            records.push(layout.record(&row?));
        }

        Ok(Self { columns, records })
    }

    /// Build a dataset from records already in memory.
    #[must_use]
    pub fn from_records(records: Vec<EmailRecord>) -> Self {
        Self {
            columns: vec![
                SUBJECT_COLUMN.to_string(),
                SENDER_COLUMN.to_string(),
                BODY_COLUMN.to_string(),
            ],
            records,
        }
    }

    /// Column names from the header row.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    /// Get the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no such record.
    pub fn get(&self, index: usize) -> Result<&EmailRecord> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// The first `n` records.
    #[must_use]
    pub fn head(&self, n: usize) -> &[EmailRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
