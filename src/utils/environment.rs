use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the Claude directory location when set
pub const CLAUDE_CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Get the Claude directory path (`$CLAUDE_CONFIG_DIR`, else `~/.claude`)
pub fn get_claude_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CLAUDE_CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".claude"))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    // Both cases live in one test so they don't race on the process environment
    #[test]
    fn test_get_claude_dir() {
        let original_home = env::var("HOME").ok();
        let original_override = env::var(CLAUDE_CONFIG_DIR_ENV).ok();

        // SAFETY: Setting environment variables in tests is safe as long as no other
        // thread reads them concurrently and the originals are restored afterwards
        unsafe {
            env::remove_var(CLAUDE_CONFIG_DIR_ENV);
            env::set_var("HOME", "/Users/testuser");
        }
        assert_eq!(get_claude_dir().unwrap(), PathBuf::from("/Users/testuser/.claude"));

        unsafe {
            env::set_var(CLAUDE_CONFIG_DIR_ENV, "/opt/claude");
        }
        assert_eq!(get_claude_dir().unwrap(), PathBuf::from("/opt/claude"));

        unsafe {
            env::remove_var(CLAUDE_CONFIG_DIR_ENV);
            env::remove_var("HOME");
        }
        let err = get_claude_dir().unwrap_err();
        assert!(err.to_string().contains("HOME environment variable not set"));

        unsafe {
            if let Some(home) = original_home {
                env::set_var("HOME", home);
            }
            if let Some(dir) = original_override {
                env::set_var(CLAUDE_CONFIG_DIR_ENV, dir);
            }
        }
    }
}
