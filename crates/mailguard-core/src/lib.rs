//! # mailguard-core
//!
//! Compliance classification core for `MailGuard`.
//!
//! This crate provides:
//! - **Category Registry** - the fixed table of compliance categories and priorities
//! - **Classifier** - ordered keyword rules mapping an email body to a category
//! - **Dataset** - loading email records from delimited files
//! - **Batch Runner** - sequential, order-preserving classification of many records
//!
//! # Example
//!
//! ```
//! use mailguard_core::{BatchRunner, CategoryRegistry, Classifier, Dataset};
//!
//! let csv = "subject,sender,body\nHi,a@example.com,This is a secret\n";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//!
//! let registry = CategoryRegistry::standard();
//! let classifier = Classifier::standard(&registry).unwrap();
//! let summary = BatchRunner::new(&classifier).summarize(dataset.records()).unwrap();
//!
//! assert_eq!(summary.flagged_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod category;
pub mod classifier;
pub mod dataset;
mod error;
pub mod record;

pub use batch::{BatchItem, BatchIter, BatchRunner, BatchSummary, FlaggedEntry};
pub use category::{Category, CategoryRegistry, Priority};
pub use classifier::{ClassificationResult, Classifier, Rule};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use record::EmailRecord;
