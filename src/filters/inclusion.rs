use super::warmup::is_warmup;
use crate::models::MessageRecord;

/// Number of records a warmup exchange occupies (user prompt + assistant greeting)
const WARMUP_RECORDS: usize = 2;

/// Decide whether a conversation has enough substance to keep.
///
/// When `trim_warmup` is set and the conversation opens with a warmup, the first two
/// records are dropped before counting. Meta records never count.
pub fn should_include(messages: &[MessageRecord], min_messages: usize, trim_warmup: bool) -> bool {
    if messages.is_empty() {
        return false;
    }

    let counted = if trim_warmup && is_warmup(messages) {
        messages.get(WARMUP_RECORDS..).unwrap_or_default()
    } else {
        messages
    };

    counted.iter().filter(|m| !m.is_meta()).count() >= min_messages
}
