use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::{ProjectInfo, ProjectMatch};
use crate::utils::{encode_path, fuzzy_match_encoded_names};

const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Discover all projects in `<claude_dir>/projects/` and their `*.jsonl` transcripts
///
/// Projects are returned sorted by encoded name and each project's transcripts by
/// file name.
///
/// # Errors
///
/// Returns an error if the projects directory exists but cannot be read. A missing
/// projects directory yields an empty Vec. Individual project directories that cannot
/// be read are logged and skipped.
pub fn discover_projects(claude_dir: &Path) -> Result<Vec<ProjectInfo>> {
    let projects_dir = claude_dir.join("projects");

    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let encoded_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let conversation_files = match list_conversation_files(&path) {
            Ok(files) => files,
            Err(e) => {
                warn!("Skipping project directory {}: {:#}", path.display(), e);
                continue;
            }
        };

        projects.push(ProjectInfo { encoded_name, project_dir: path, conversation_files });
    }

    projects.sort_by(|a, b| a.encoded_name.cmp(&b.encoded_name));
    Ok(projects)
}

/// All `*.jsonl` files directly inside `dir`, sorted by file name
pub fn list_conversation_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read project directory: {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION))
        .collect();
    files.sort();
    Ok(files)
}

/// Find the project directory Claude Code created for `project_path`.
///
/// An exact encoded-name match wins. Otherwise the fuzzy match with the fewest
/// unknown positions is chosen; ties are logged as ambiguous and resolved to the
/// lexically smallest name.
pub fn resolve_project(projects: &[ProjectInfo], project_path: &Path) -> Option<ProjectMatch> {
    let ours = encode_path(project_path);

    let mut candidates: Vec<(&ProjectInfo, usize)> = projects
        .iter()
        .filter_map(|p| match fuzzy_match_encoded_names(&ours, &p.encoded_name) {
            (true, unknown) => Some((p, unknown)),
            (false, _) => None,
        })
        .collect();
    candidates.sort_by(|(a, ua), (b, ub)| {
        ua.cmp(ub).then_with(|| a.encoded_name.cmp(&b.encoded_name))
    });

    let (best, unknown_count) = *candidates.first()?;
    let tied: Vec<&str> = candidates
        .iter()
        .filter(|(_, u)| *u == unknown_count)
        .map(|(p, _)| p.encoded_name.as_str())
        .collect();
    if tied.len() > 1 {
        warn!(
            "Ambiguous project match for {}: {} (using {})",
            project_path.display(),
            tied.join(", "),
            best.encoded_name
        );
    }

    Some(ProjectMatch { project: best.clone(), unknown_count })
}
