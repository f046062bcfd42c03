//! Classification result.

use serde::Serialize;

use crate::category::{Priority, names};

/// Reason attached to a compliant result.
pub const NO_ISSUE_REASON: &str = "No compliance issues detected";

/// Outcome of classifying one email body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// True iff `category` is not "No Issue".
    pub flagged: bool,
    /// Matched category name.
    pub category: String,
    /// Human-readable explanation.
    pub reason: String,
    /// Original body on match, empty otherwise.
    pub source_excerpt: String,
    /// Priority of `category` in the registry.
    pub priority: Priority,
}

impl ClassificationResult {
    /// Result for a body that matched a violation category.
    #[must_use]
    pub fn flagged(category: &str, reason: &str, body: &str, priority: Priority) -> Self {
        Self {
            flagged: true,
            category: category.to_string(),
            reason: reason.to_string(),
            source_excerpt: body.to_string(),
            priority,
        }
    }

    /// Result for a body that matched nothing.
    #[must_use]
    pub fn no_issue() -> Self {
        Self {
            flagged: false,
            category: names::NO_ISSUE.to_string(),
            reason: NO_ISSUE_REASON.to_string(),
            source_excerpt: String::new(),
            priority: Priority::NONE,
        }
    }

    /// Check if this result is compliant.
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        !self.flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_issue_shape() {
        let result = ClassificationResult::no_issue();
        assert!(result.is_compliant());
        assert_eq!(result.category, "No Issue");
        assert_eq!(result.reason, "No compliance issues detected");
        assert_eq!(result.source_excerpt, "");
        assert_eq!(result.priority, Priority::NONE);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = ClassificationResult::flagged("Market Bribery", "why", "body", Priority::HIGH);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["flagged"], true);
        assert_eq!(value["category"], "Market Bribery");
        assert_eq!(value["source_excerpt"], "body");
        assert_eq!(value["priority"], 3);
    }
}
