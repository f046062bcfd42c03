//! Category data models.

use serde::Serialize;

/// Severity of a compliance category.
///
/// Valid values are `0..=3`; the constructors never produce anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Compliant, nothing to review.
    pub const NONE: Self = Self(0);
    /// Low severity.
    pub const LOW: Self = Self(1);
    /// Medium severity.
    pub const MEDIUM: Self = Self(2);
    /// High severity.
    pub const HIGH: Self = Self(3);

    /// Create a priority from its numeric value.
    ///
    /// Returns `None` when `value` is above 3.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::HIGH.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of this priority.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "None",
            1 => "Low",
            2 => "Medium",
            _ => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named compliance-violation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display name, also the lookup key.
    pub name: &'static str,
    /// Severity of this category.
    pub priority: Priority,
}

impl Category {
    /// Create a new category.
    #[must_use]
    pub const fn new(name: &'static str, priority: Priority) -> Self {
        Self { name, priority }
    }

    /// Check if this category represents a violation.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        self.priority.value() > 0
    }
}
