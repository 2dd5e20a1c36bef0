//! `leadset-recon` — Lead deduplication reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded lead records, returns the
//! deduplicated set plus a change log. No CLI or file I/O dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod source;

pub use config::DedupeConfig;
pub use engine::{reconcile, run};
pub use error::DedupeError;
pub use model::{ChangeEvent, DedupeResult, DedupeSummary, Lead};
