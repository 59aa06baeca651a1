//! JSONL parsing for Claude Code transcript files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed JSON or non-UTF-8 lines are reported as
//!   [`LineDiagnostic`]s (and logged with `tracing`) and skipped, so a single bad
//!   line never hides the rest of a conversation.
//!
//! - **Missing fields**: Every field is optional. Lookups return `None` rather than
//!   failing.
//!
//! - **Error propagation**: Only failing to open or read the file itself is an error,
//!   returned as `anyhow::Result` with the path in context.

pub mod timestamps;
pub mod transcript;

pub use timestamps::parse_timestamp;
pub use transcript::{LineDiagnostic, LoadOutcome, TranscriptParser, load_records, summarize};
