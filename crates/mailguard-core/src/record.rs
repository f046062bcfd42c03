//! Email record model.

use serde::Serialize;

use crate::error::{Error, Result};

/// Display value used when a record has no sender.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// One email row from a tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailRecord {
    /// Subject line (empty when the source has no subject).
    pub subject: String,
    /// Sender address or name.
    pub sender: Option<String>,
    /// Message body. `None` when the row has no cell for it; an empty
    /// cell is `Some("")`.
    pub body: Option<String>,
}

impl EmailRecord {
    /// Create a record with a body.
    #[must_use]
    pub fn new(subject: impl Into<String>, sender: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            sender: sender.map(ToString::to_string),
            body: Some(body.into()),
        }
    }

    /// Sender, or "Unknown" when absent.
    #[must_use]
    pub fn sender_or_unknown(&self) -> &str {
        self.sender.as_deref().unwrap_or(UNKNOWN_SENDER)
    }

    /// Body of the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the record has no body.
    pub fn require_body(&self, index: usize) -> Result<&str> {
        self.body.as_deref().ok_or_else(|| Error::MissingField {
            index,
            field: "body".to_string(),
        })
    }

    /// One-line label used when listing records.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        format!("{index}: {} - {}", self.subject, self.sender_or_unknown())
    }
}
