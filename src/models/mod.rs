//! Data models for Claude Code conversation transcripts.
//!
//! - [`MessageRecord`] - One decoded transcript line with dual field locations
//! - [`ConversationInfo`] - Metadata derived from a transcript's records
//! - [`ConversationSummary`] - A listed conversation with its parsed start time
//! - [`ProjectInfo`] / [`ProjectMatch`] - Discovered project directories

pub mod conversation;
pub mod project;
pub mod record;

pub use conversation::{ConversationInfo, ConversationSummary};
pub use project::{ProjectInfo, ProjectMatch};
pub use record::MessageRecord;
