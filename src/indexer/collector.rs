use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::FilterSettings;
use crate::filters::{filter_by_range, should_include};
use crate::models::ConversationSummary;
use crate::parsers::TranscriptParser;

/// Load transcripts and keep those that pass the inclusion and time filters
///
/// Unreadable files are logged and skipped. The result is ordered newest first, with
/// undated conversations last.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_notes::config::FilterSettings;
/// use claude_notes::indexer::collect_conversations;
///
/// let files = vec![PathBuf::from("/Users/alice/.claude/projects/-Users-alice-app/s1.jsonl")];
/// let conversations = collect_conversations(&files, &FilterSettings::default());
/// println!("{} conversations", conversations.len());
/// ```
pub fn collect_conversations(
    files: &[PathBuf],
    settings: &FilterSettings,
) -> Vec<ConversationSummary> {
    let mut conversations = Vec::new();
    let mut skipped = 0;

    for path in files {
        let parser = match TranscriptParser::open(path) {
            Ok(parser) => parser,
            Err(e) => {
                warn!("Skipping transcript {}: {:#}", path.display(), e);
                continue;
            }
        };

        if !should_include(parser.messages(), settings.min_messages, settings.trim_warmup) {
            skipped += 1;
            continue;
        }

        let summary =
            if settings.trim_warmup { parser.summary_without_warmup() } else { parser.summary() };
        let info = parser.conversation_info();
        conversations.push(ConversationSummary::new(path.clone(), info, summary));
    }

    debug!("{} conversations kept, {} below the message threshold", conversations.len(), skipped);

    let mut conversations = filter_by_range(conversations, settings.past);
    // Option orders None first, so reversing puts undated conversations last
    conversations.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    conversations
}
