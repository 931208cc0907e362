//! Submission pipeline
//!
//! Orchestrates record submission: validate → upload attachments → compose →
//! persist → notify. See [service::SubmissionService].

pub mod service;
pub mod types;

pub use service::SubmissionService;
pub use types::{AssetSlot, AttachmentLimits, SubmissionMode, SubmissionOutcome};
