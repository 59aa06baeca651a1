use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::filters::warmup::is_warmup;
use crate::models::{ConversationInfo, MessageRecord};

/// Maximum characters of the first user line used as a summary
const SUMMARY_MAX_CHARS: usize = 100;
const TITLE_RECORD_TYPE: &str = "conversation_title";
const ROLE_USER: &str = "user";

/// A transcript line that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub file_name: String,
    /// 1-based line number
    pub line_number: usize,
    pub line: String,
    pub error: String,
}

/// Records decoded from one transcript plus the lines that were skipped
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<MessageRecord>,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl LoadOutcome {
    fn push_line(mut self, file_name: &str, line_number: usize, line: &str) -> Self {
        match serde_json::from_str::<MessageRecord>(line) {
            Ok(record) => self.records.push(record),
            Err(e) => self.reject(file_name, line_number, line, e.to_string()),
        }
        self
    }

    fn reject(&mut self, file_name: &str, line_number: usize, line: &str, error: String) {
        warn!("Failed to parse line {} in {}: {} ({})", line_number, file_name, line, error);
        self.diagnostics.push(LineDiagnostic {
            file_name: file_name.to_string(),
            line_number,
            line: line.to_string(),
            error,
        });
    }
}

/// Load every non-empty line of a JSONL transcript as a [`MessageRecord`].
///
/// Malformed lines (invalid JSON or invalid UTF-8) are reported as diagnostics and
/// skipped; only failing to open or read the file is an error.
pub fn load_records(path: &Path) -> Result<LoadOutcome> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut outcome = LoadOutcome::default();
    for (line_num, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = bytes
            .with_context(|| format!("Failed to read line from transcript: {}", path.display()))?;
        let line_number = line_num + 1;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                outcome.reject(&file_name, line_number, &lossy, e.utf8_error().to_string());
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        outcome = outcome.push_line(&file_name, line_number, trimmed);
    }

    debug!(
        "Loaded {}: {} records ({} skipped)",
        path.display(),
        outcome.records.len(),
        outcome.diagnostics.len()
    );

    Ok(outcome)
}

/// All records of one transcript file, in file order
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    path: PathBuf,
    messages: Vec<MessageRecord>,
}

impl TranscriptParser {
    pub fn open(path: &Path) -> Result<Self> {
        let outcome = load_records(path)?;
        Ok(Self::from_records(path.to_path_buf(), outcome.records))
    }

    pub fn from_records(path: PathBuf, messages: Vec<MessageRecord>) -> Self {
        Self { path, messages }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    /// Records with a leading warmup exchange removed
    pub fn messages_without_warmup(&self) -> &[MessageRecord] {
        if is_warmup(&self.messages) {
            self.messages.get(2..).unwrap_or_default()
        } else {
            &self.messages
        }
    }

    pub fn conversation_info(&self) -> ConversationInfo {
        let timestamps = || self.messages.iter().filter_map(MessageRecord::timestamp);

        ConversationInfo {
            file_name: self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            message_count: self.messages.iter().filter(|m| !m.is_meta()).count(),
            total_entries: self.messages.len(),
            start_time: timestamps().min().map(str::to_string),
            end_time: timestamps().max().map(str::to_string),
            conversation_id: self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .filter(|s| !s.is_empty()),
            session_id: self.messages.first().and_then(|m| m.session_id()).map(str::to_string),
        }
    }

    /// Summary of the whole transcript, see [`summarize`]
    pub fn summary(&self) -> Option<String> {
        summarize(&self.messages)
    }

    /// Summary taken after the warmup exchange, so it doesn't read "Warmup"
    pub fn summary_without_warmup(&self) -> Option<String> {
        summarize(self.messages_without_warmup())
    }
}

/// First conversation title or user text message, whichever comes first in file order.
///
/// A title is used as recorded (non-string content is rendered as JSON). A user
/// message contributes the first line of its text, capped at 100 characters.
pub fn summarize(records: &[MessageRecord]) -> Option<String> {
    records.iter().find_map(|m| {
        if m.record_type() == Some(TITLE_RECORD_TYPE) {
            return Some(match m.content() {
                Some(Value::String(title)) => title.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            });
        }
        if m.role() != Some(ROLE_USER) {
            return None;
        }
        m.text_content().filter(|c| !c.is_empty()).map(first_line_summary)
    })
}

fn first_line_summary(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut summary: String = first_line.chars().take(SUMMARY_MAX_CHARS).collect();
    if first_line.chars().count() > SUMMARY_MAX_CHARS {
        summary.push_str("...");
    }
    summary
}
