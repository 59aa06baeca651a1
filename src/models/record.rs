use serde::Deserialize;
use serde_json::Value;

/// Key under which newer transcript formats nest the message fields
const NESTED_KEY: &str = "message";

/// One decoded line of a transcript file.
///
/// Transcripts written by different Claude Code versions place fields like `role`
/// and `content` either at the top level or under a nested `message` object. All
/// field lookups go through [`MessageRecord::field`], which checks the top level
/// first and falls back to the nested object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct MessageRecord(Value);

impl MessageRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a field at the top level, then under `message`.
    ///
    /// A top-level `null` is treated as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.top_level(name).or_else(|| self.nested(name))
    }

    /// String-valued field, if present and a string
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.str_field("role")
    }

    pub fn content(&self) -> Option<&Value> {
        self.field("content")
    }

    /// Content when it is a plain string (as opposed to a list of content blocks)
    pub fn text_content(&self) -> Option<&str> {
        self.content().and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.str_field("timestamp")
    }

    pub fn session_id(&self) -> Option<&str> {
        self.str_field("sessionId")
    }

    pub fn record_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    /// Meta records (command echoes, caveats) don't count as conversation messages.
    ///
    /// Unlike other fields, the flag is true if set at EITHER location.
    pub fn is_meta(&self) -> bool {
        let flagged = |v: Option<&Value>| v.and_then(Value::as_bool).unwrap_or(false);
        flagged(self.top_level("isMeta")) || flagged(self.nested("isMeta"))
    }

    fn top_level(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    fn nested(&self, name: &str) -> Option<&Value> {
        self.0.get(NESTED_KEY).and_then(|m| m.get(name)).filter(|v| !v.is_null())
    }
}
