//! Keyword rules.

use crate::category::names;

/// One (predicate, category) pair.
///
/// The predicate holds when any keyword occurs as a substring of the
/// case-folded body (see [`fold_case`]). Keywords must be lowercase ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Category emitted on match.
    pub category: &'static str,
    /// Lowercase substrings, any of which triggers the rule.
    pub keywords: &'static [&'static str],
    /// Human-readable explanation attached to the result.
    pub reason: &'static str,
}

impl Rule {
    /// Create a new rule.
    #[must_use]
    pub const fn new(
        category: &'static str,
        keywords: &'static [&'static str],
        reason: &'static str,
    ) -> Self {
        Self {
            category,
            keywords,
            reason,
        }
    }

    /// Check whether `folded` triggers this rule.
    ///
    /// `folded` must already have gone through [`fold_case`].
    #[must_use]
    pub fn matches(&self, folded: &str) -> bool {
        self.matched_keyword(folded).is_some()
    }

    /// First keyword found in `folded`, if any.
    #[must_use]
    pub fn matched_keyword(&self, folded: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| folded.contains(keyword))
    }
}

/// Case-fold text for keyword matching.
///
/// Lower, upper, then lower again, so that `fold_case(s)`,
/// `fold_case(&s.to_uppercase())` and `fold_case(&s.to_lowercase())` agree.
/// A single `to_lowercase` misses "ſ" and "ﬁ", whose uppercase forms are
/// "S" and "FI"; `to_uppercase().to_lowercase()` alone misses "ẞ".
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase().to_uppercase().to_lowercase()
}

/// Built-in rules, highest precedence first.
pub const STANDARD_RULES: [Rule; 6] = [
    Rule::new(
        names::SECRECY_BREACH,
        &["secret", "confidential", "leak"],
        "Contains confidential information sharing",
    ),
    Rule::new(
        names::MARKET_MANIPULATION,
        &["manipulate", "rig", "insider"],
        "Discusses market manipulation activities",
    ),
    Rule::new(
        names::MARKET_BRIBERY,
        &["bribe", "kickback"],
        "References bribery or kickbacks",
    ),
    Rule::new(
        names::HARASSMENT,
        &["discriminat", "harass"],
        "Contains discriminatory or harassing content",
    ),
    Rule::new(
        names::DATA_PRIVACY,
        &["privacy", "personal data"],
        "Violates data privacy regulations",
    ),
    Rule::new(
        names::EMPLOYEE_ETHICS,
        &["unethical", "ethics"],
        "Raises ethical concerns",
    ),
];
