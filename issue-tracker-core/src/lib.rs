//! Core library for the issue tracker.
//!
//! This crate provides the issue models and the in-memory issue store,
//! independent of any transport layer.
//!
//! # Usage
//!
//! ```
//! use issue_tracker_core::models::*;
//! use issue_tracker_core::IssueStore;
//!
//! let store = IssueStore::new();
//! let issue = store.create("apitest", NewIssue::new("Crash on save", "Steps...", "joe"))?;
//!
//! let open = store.query("apitest", &[IssueFilter::parse("open", "true")]);
//! assert_eq!(open, vec![issue]);
//! # Ok::<(), issue_tracker_core::StoreError>(())
//! ```

pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{Action, StoreError};
pub use store::IssueStore;
