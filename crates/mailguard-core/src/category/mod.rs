//! Compliance categories and their priorities.
//!
//! This module provides:
//! - **Priority**: severity attached to a category (0 = none, 3 = high)
//! - **Category**: a named compliance-violation class
//! - **Registry**: the fixed, read-only table of every known category
//!
//! The registry is built once and handed to the classifier explicitly.
//! Nothing in this module mutates after construction.
//!
//! # Example
//!
//! ```
//! use mailguard_core::category::{CategoryRegistry, Priority, names};
//!
//! let registry = CategoryRegistry::standard();
//! assert_eq!(registry.lookup(names::SECRECY_BREACH).unwrap(), Priority::HIGH);
//! assert!(registry.lookup("Gossip").is_err());
//! ```

mod model;
mod registry;

pub use model::{Category, Priority};
pub use registry::{CategoryRegistry, names};
