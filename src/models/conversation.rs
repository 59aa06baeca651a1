use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::filters::time_range::HasStartTime;
use crate::parsers::timestamps::parse_timestamp;

/// Metadata derived from the full record list of one transcript file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationInfo {
    pub file_name: String,
    /// Records not flagged as meta
    pub message_count: usize,
    /// All records, meta included
    pub total_entries: usize,
    /// Lexically smallest timestamp string (ISO-8601 sorts chronologically)
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub conversation_id: Option<String>,
    pub session_id: Option<String>,
}

impl ConversationInfo {
    /// Parsed `start_time`, if present and understood
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_deref().and_then(parse_timestamp)
    }
}

/// One conversation as listed by the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub path: PathBuf,
    pub info: ConversationInfo,
    pub summary: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

impl ConversationSummary {
    pub fn new(path: PathBuf, info: ConversationInfo, summary: Option<String>) -> Self {
        let start_time = info.started_at();
        Self { path, info, summary, start_time }
    }
}

impl HasStartTime for ConversationSummary {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }
}
