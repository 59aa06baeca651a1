use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_MIN_MESSAGES, FilterSettings};
use crate::filters::TimeRange;
use crate::indexer::{collect_conversations, discover_projects, resolve_project};
use crate::models::ConversationSummary;
use crate::utils::{expand_tilde, format_path_with_tilde, get_claude_dir};

#[derive(Parser)]
#[command(name = "claude-notes")]
#[command(version = "0.1.0")]
#[command(about = "Browse Claude Code conversation transcripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List conversations for a project
    List(ListArgs),
    /// List project directories and their conversation counts
    Projects,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project path (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Hide conversations with fewer messages than this
    #[arg(long, default_value_t = DEFAULT_MIN_MESSAGES)]
    pub min_messages: usize,

    /// Count the "Warmup" opening exchange as regular messages
    #[arg(long)]
    pub no_trim_warmup: bool,

    /// Only show conversations started within this window
    #[arg(long, value_enum)]
    pub past: Option<TimeRange>,
}

impl ListArgs {
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            min_messages: self.min_messages,
            trim_warmup: !self.no_trim_warmup,
            past: self.past,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List(args)) => list_conversations(args)?,
        Some(Commands::Projects) => list_projects()?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn list_conversations(args: &ListArgs) -> Result<()> {
    let project_path = match &args.path {
        Some(path) => expand_tilde(path),
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    let claude_dir = get_claude_dir()?;
    let projects = discover_projects(&claude_dir)?;

    let Some(found) = resolve_project(&projects, &project_path) else {
        println!("No Claude Code project found for {}", format_path_with_tilde(&project_path));
        return Ok(());
    };

    let conversations = collect_conversations(&found.project.conversation_files, &args.settings());

    println!(
        "Project: {} ({})",
        format_path_with_tilde(&project_path),
        found.project.encoded_name
    );
    if !found.is_exact() {
        println!("  matched with {} ambiguous character(s)", found.unknown_count);
    }
    println!("Conversations: {}", conversations.len());
    println!();

    for conversation in &conversations {
        println!("{}", format_conversation_line(conversation));
    }

    Ok(())
}

fn list_projects() -> Result<()> {
    let claude_dir = get_claude_dir()?;
    let projects = discover_projects(&claude_dir)?;

    println!("Claude directory: {}", format_path_with_tilde(&claude_dir));
    println!("Projects: {}", projects.len());
    for project in &projects {
        println!("  {} ({} conversations)", project.encoded_name, project.conversation_files.len());
    }

    Ok(())
}

fn format_conversation_line(conversation: &ConversationSummary) -> String {
    let date = conversation
        .start_time
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    let id = conversation
        .info
        .conversation_id
        .as_deref()
        .unwrap_or_else(|| file_name_or_empty(&conversation.path));
    let summary = conversation.summary.as_deref().unwrap_or("(no summary)");

    format!("{}  {}  {} messages  {}", date, id, conversation.info.message_count, summary)
}

fn file_name_or_empty(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}
