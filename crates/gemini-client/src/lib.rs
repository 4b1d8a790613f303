//! `gemini-client` — typed Rust client for the Gemini `generateContent`
//! REST API.
//!
//! The inktrack workspace uses this to draft client progress updates and
//! work-plan suggestions from a commission's summary fields, without pulling
//! in a vendor SDK.
//!
//! # Architecture
//!
//! ```text
//! CommissionBrief
//!     │
//!     ▼
//! prompt::client_update / prompt::work_plan   ← string templates
//!     │
//!     ▼
//! GeminiClient::generate   ← POST …/models/{model}:generateContent
//!     │                      typed request/response structs, no Value
//!     ▼
//! String                   ← first candidate's text
//! ```
//!
//! Callers at the UI boundary are expected to degrade failures to a static
//! notice string rather than surfacing the error.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GeminiError;
pub use prompt::CommissionBrief;
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiError>;
