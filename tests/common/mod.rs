//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given encoded name and transcripts
    pub fn with_project(self, encoded_name: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a JSONL transcript file
pub struct TranscriptBuilder {
    filename: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Prepend the user "Warmup" + assistant greeting exchange
    pub fn with_warmup(self) -> Self {
        self.with_record(RecordBuilder::user("Warmup"))
            .with_record(RecordBuilder::assistant_blocks("I'm ready to help!"))
    }

    /// Write the file into `dir` and return its path
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.filename);
        fs::write(&path, self.lines.join("\n")).expect("Failed to write transcript");
        path
    }
}

/// Builder for one transcript record in the nested `message` format
pub struct RecordBuilder {
    role: String,
    content: Value,
    timestamp: Option<String>,
    session_id: Option<String>,
    is_meta: bool,
}

impl RecordBuilder {
    /// User message with string content
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Value::String(text.to_string()),
            timestamp: None,
            session_id: None,
            is_meta: false,
        }
    }

    /// Assistant message with a single text content block
    pub fn assistant_blocks(text: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: json!([{"type": "text", "text": text}]),
            timestamp: None,
            session_id: None,
            is_meta: false,
        }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn meta(mut self) -> Self {
        self.is_meta = true;
        self
    }

    pub fn to_json(&self) -> String {
        let mut record = json!({"message": {"role": self.role, "content": self.content}});
        if let Some(ts) = &self.timestamp {
            record["timestamp"] = json!(ts);
        }
        if let Some(id) = &self.session_id {
            record["sessionId"] = json!(id);
        }
        if self.is_meta {
            record["isMeta"] = json!(true);
        }
        record.to_string()
    }
}

/// The five-record warmup conversation used across tests: warmup exchange followed
/// by two user messages and one assistant reply
pub fn warmup_transcript(filename: &str, timestamp: &str) -> TranscriptBuilder {
    TranscriptBuilder::new(filename)
        .with_warmup()
        .with_record(RecordBuilder::user("Hi").timestamp(timestamp).session_id("session-1"))
        .with_record(RecordBuilder::user("Can you help me with a quick question?"))
        .with_record(RecordBuilder::assistant_blocks("Of course!"))
}
