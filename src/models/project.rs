use std::path::PathBuf;

/// A directory under `~/.claude/projects/` and the transcripts it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Directory name as written by Claude Code's own encoder
    pub encoded_name: String,
    pub project_dir: PathBuf,
    pub conversation_files: Vec<PathBuf>,
}

/// A project resolved from a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMatch {
    pub project: ProjectInfo,
    /// Positions where the match could not be disproved (0 for an exact match)
    pub unknown_count: usize,
}

impl ProjectMatch {
    pub fn is_exact(&self) -> bool {
        self.unknown_count == 0
    }
}
