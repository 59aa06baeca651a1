use crate::filters::TimeRange;

/// Conversations with fewer non-meta messages than this are hidden by default
pub const DEFAULT_MIN_MESSAGES: usize = 10;

/// Caller policy for which conversations to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    pub min_messages: usize,
    /// Drop a leading "Warmup" exchange before counting messages
    pub trim_warmup: bool,
    pub past: Option<TimeRange>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self { min_messages: DEFAULT_MIN_MESSAGES, trim_warmup: true, past: None }
    }
}
