//! Keyword classifier.
//!
//! Maps free text to the first compliance category whose keyword rule
//! fires, checking rules in a fixed precedence order:
//!
//! 1. Secrecy Breach
//! 2. Market Manipulation/Misconduct
//! 3. Market Bribery
//! 4. Harassment or Discrimination
//! 5. Data Privacy Violation
//! 6. Employee Ethics
//!
//! Bodies matching none of them are "No Issue". Matching is a
//! case-insensitive substring test on [`fold_case`]d text, so "rig" also
//! fires on "original".
//!
//! # Example
//!
//! ```
//! use mailguard_core::{CategoryRegistry, Classifier};
//!
//! let registry = CategoryRegistry::standard();
//! let classifier = Classifier::standard(&registry).unwrap();
//!
//! let result = classifier.classify("Please keep this confidential");
//! assert!(result.flagged);
//! assert_eq!(result.category, "Secrecy Breach");
//! ```

mod result;
mod rule;

pub use result::{ClassificationResult, NO_ISSUE_REASON};
pub use rule::{Rule, STANDARD_RULES, fold_case};

use tracing::trace;

use crate::category::{CategoryRegistry, Priority, names};
use crate::error::Result;

/// A rule paired with its category's priority, resolved at construction.
#[derive(Debug, Clone, Copy)]
struct ResolvedRule {
    rule: Rule,
    priority: Priority,
}

/// Ordered rule evaluator.
///
/// Construction resolves every rule against a [`CategoryRegistry`], so
/// `classify` never fails and result priorities always agree with the
/// registry.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ResolvedRule>,
}

impl Classifier {
    /// Create a classifier from rules in precedence order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownCategory`] if a rule names a category
    /// missing from `registry`, or if the registry has no "No Issue" entry.
    pub fn new(registry: &CategoryRegistry, rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        registry.lookup(names::NO_ISSUE)?;

        let rules = rules
            .into_iter()
            .map(|rule| {
                let priority = registry.lookup(rule.category)?;
                Ok(ResolvedRule { rule, priority })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Create a classifier with the built-in rules.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownCategory`] if `registry` lacks a
    /// category used by [`STANDARD_RULES`].
    pub fn standard(registry: &CategoryRegistry) -> Result<Self> {
        Self::new(registry, STANDARD_RULES)
    }

    /// Classify one email body.
    ///
    /// Pure and deterministic; any string, including the empty string,
    /// yields a result.
    #[must_use]
    pub fn classify(&self, body: &str) -> ClassificationResult {
        let folded = fold_case(body);

        for resolved in &self.rules {
            if let Some(keyword) = resolved.rule.matched_keyword(&folded) {
                trace!(category = resolved.rule.category, keyword, "rule matched");
                return ClassificationResult::flagged(
                    resolved.rule.category,
                    resolved.rule.reason,
                    body,
                    resolved.priority,
                );
            }
        }

        ClassificationResult::no_issue()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|r| &r.rule)
    }
}
