use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

const ENCODED_DASH: char = '-';

/// Encodes a file system path into a project directory name by replacing path
/// separators with `-`
///
/// Every other character is kept verbatim, so the result has exactly one character
/// per path character. Claude Code's own encoder also collapses other characters to
/// `-`; use [`fuzzy_match_encoded_names`] to compare the two.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use claude_notes::encode_path;
///
/// let path = PathBuf::from("/Users/foo/my.project");
/// assert_eq!(encode_path(&path), "-Users-foo-my.project");
/// ```
pub fn encode_path(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| if c == '/' || c == '\\' { ENCODED_DASH } else { c })
        .collect()
}

/// Characters both encoders preserve verbatim: ASCII letters, ASCII digits and `-`.
///
/// Everything else, including any non-ASCII character, may be collapsed to `-` by
/// Claude Code's encoder.
pub fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ENCODED_DASH
}

/// Compares our encoding of a path with Claude Code's encoding, character by
/// character.
///
/// Returns `(matches, unknown_count)`. Safe characters must match exactly. An unsafe
/// character on our side facing a `-` on Claude's side can't be disproved, so it is
/// counted as unknown rather than treated as a mismatch.
///
/// # Examples
///
/// ```
/// use claude_notes::fuzzy_match_encoded_names;
///
/// assert_eq!(fuzzy_match_encoded_names("-tmp-my.proj", "-tmp-my-proj"), (true, 1));
/// assert_eq!(fuzzy_match_encoded_names("-tmp-a", "-tmp-b"), (false, 0));
/// ```
pub fn fuzzy_match_encoded_names(ours: &str, reference: &str) -> (bool, usize) {
    if ours.chars().count() != reference.chars().count() {
        return (false, 0);
    }

    let mut unknown_count = 0;
    for (a, b) in ours.chars().zip(reference.chars()) {
        if a == b {
            continue;
        }
        if !is_safe_char(a) && b == ENCODED_DASH {
            unknown_count += 1;
            continue;
        }
        return (false, 0);
    }

    (true, unknown_count)
}

/// Expands a leading `~` to the user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_internal(path, dirs::home_dir())
}

fn expand_tilde_internal(path: &Path, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_notes::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();

    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
