//! The fixed category table.

use tracing::error;

use super::model::{Category, Priority};
use crate::error::{Error, Result};

/// Canonical category names.
pub mod names {
    /// Confidentiality violations.
    pub const SECRECY_BREACH: &str = "Secrecy Breach";
    /// Financial or regulatory market misconduct.
    pub const MARKET_MANIPULATION: &str = "Market Manipulation/Misconduct";
    /// Corruption.
    pub const MARKET_BRIBERY: &str = "Market Bribery";
    /// Changes to communication channels.
    pub const CHANGE_IN_COMMUNICATION: &str = "Change in Communication";
    /// Complaints of any kind.
    pub const COMPLAINTS: &str = "Complaints";
    /// Ethical concerns raised by employees.
    pub const EMPLOYEE_ETHICS: &str = "Employee Ethics";
    /// Harassment or discrimination.
    pub const HARASSMENT: &str = "Harassment or Discrimination";
    /// Financial misconduct.
    pub const FINANCIAL_MISCONDUCT: &str = "Financial Misconduct";
    /// Personal data handling violations.
    pub const DATA_PRIVACY: &str = "Data Privacy Violation";
    /// Regulatory non-compliance.
    pub const REGULATORY_NON_COMPLIANCE: &str = "Regulatory Non-Compliance";
    /// Security breaches.
    pub const SECURITY_BREACH: &str = "Security Breach";
    /// General ethical violations.
    pub const ETHICAL_VIOLATION: &str = "Ethical Violation";
    /// Compliant message.
    pub const NO_ISSUE: &str = "No Issue";
}

const STANDARD_CATEGORIES: [Category; 13] = [
    Category::new(names::SECRECY_BREACH, Priority::HIGH),
    Category::new(names::MARKET_MANIPULATION, Priority::HIGH),
    Category::new(names::MARKET_BRIBERY, Priority::HIGH),
    Category::new(names::CHANGE_IN_COMMUNICATION, Priority::MEDIUM),
    Category::new(names::COMPLAINTS, Priority::MEDIUM),
    Category::new(names::EMPLOYEE_ETHICS, Priority::LOW),
    Category::new(names::HARASSMENT, Priority::HIGH),
    Category::new(names::FINANCIAL_MISCONDUCT, Priority::HIGH),
    Category::new(names::DATA_PRIVACY, Priority::HIGH),
    Category::new(names::REGULATORY_NON_COMPLIANCE, Priority::MEDIUM),
    Category::new(names::SECURITY_BREACH, Priority::MEDIUM),
    Category::new(names::ETHICAL_VIOLATION, Priority::LOW),
    Category::new(names::NO_ISSUE, Priority::NONE),
];

/// Read-only table of every known category.
///
/// There is no mutation API; build one at startup and share it by reference.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: &'static [Category],
}

impl CategoryRegistry {
    /// The built-in compliance table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            categories: &STANDARD_CATEGORIES,
        }
    }

    /// Look up the priority of a category by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if no category has this name.
    pub fn lookup(&self, name: &str) -> Result<Priority> {
        self.get(name).map(|c| c.priority).ok_or_else(|| {
            error!(category = name, "category lookup miss");
            Error::UnknownCategory(name.to_string())
        })
    }

    /// Get a category by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterate over all categories in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
