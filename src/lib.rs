//! Claude Notes - Browse Claude Code conversation transcripts
//!
//! This library reads Claude Code's per-project JSONL transcripts from
//! `~/.claude/projects/` and decides which conversations are worth showing:
//!
//! - Loading transcripts line by line, skipping malformed lines
//! - Detecting and trimming the synthetic "Warmup" opening exchange
//! - Filtering by minimum message count and recency window
//! - Matching a project path to Claude Code's lossy directory-name encoding
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use claude_notes::{TranscriptParser, should_include};
//!
//! let parser = TranscriptParser::open(Path::new("session.jsonl"))?;
//! if should_include(parser.messages(), 3, true) {
//!     println!("{:?}", parser.summary());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use filters::{TimeRange, filter_by_range, is_warmup, should_include};
pub use models::{ConversationInfo, ConversationSummary, MessageRecord};
pub use parsers::{TranscriptParser, load_records};
pub use utils::paths::{
    encode_path, format_path_with_tilde, fuzzy_match_encoded_names, is_safe_char,
};
