use crate::models::MessageRecord;

const WARMUP_PROMPT: &str = "Warmup";

/// Detect a synthetic warmup exchange at the start of a conversation.
///
/// Claude Code opens some sessions with a user "Warmup" prompt followed by an
/// assistant greeting. Only the first record is inspected; the greeting is assumed
/// to follow it.
pub fn is_warmup(messages: &[MessageRecord]) -> bool {
    let Some(first) = messages.first() else {
        return false;
    };

    if first.role() != Some("user") {
        return false;
    }

    first.text_content().is_some_and(|content| content.trim() == WARMUP_PROMPT)
}
