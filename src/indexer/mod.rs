//! Locating and collecting conversations on disk
//!
//! # Error Handling Strategy
//!
//! - **Project-level failures**: Project directories that can't be read are logged and
//!   skipped so one bad directory doesn't hide the rest.
//!
//! - **Transcript-level failures**: Transcripts that can't be opened are logged and
//!   skipped. Malformed lines inside a transcript are handled by the parser.
//!
//! - **Project resolution**: Claude Code's directory-name encoder is lossy, so a path
//!   is resolved by fuzzy matching. Ambiguous matches are logged, never fatal.

pub mod collector;
pub mod project_discovery;

pub use collector::collect_conversations;
pub use project_discovery::{discover_projects, list_conversation_files, resolve_project};
