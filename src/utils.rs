//! Utility functions for directory management and display helpers
//!
//! Directories follow the XDG Base Directory specification.
//!
//! # Directory Structure
//!
//! - Config: `~/.config/datawhisper/` - `config.json`
//! - State: `~/.local/state/datawhisper/` - log file
//!
//! # Example
//!
//! ```
//! use datawhisper::utils::{ensure_dirs, get_state_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(state_path) = get_state_dir() {
//!     let _log = state_path.join("datawhisper.log");
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "datawhisper", "datawhisper")
}

pub fn get_config_dir() -> Option<PathBuf> {
    project_dirs().map(|pd| pd.config_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    project_dirs().and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

/// Creates the state directory with user-only permissions.
///
/// The config directory is never created; a missing config file just means defaults.
///
/// # Errors
///
/// Returns [`crate::core::error::Error::Io`] if the directory cannot be created.
pub fn ensure_dirs() -> crate::core::error::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

/// Uppercase first letter of each whitespace-separated word
///
/// ```
/// assert_eq!(datawhisper::utils::initials("John Doe"), "JD");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Truncates a string to a maximum length and adds an ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Find the nearest character boundary to avoid splitting multi-byte characters
        let end = s
            .char_indices()
            .map(|(idx, _)| idx)
            .take_while(|&idx| idx <= max_len.saturating_sub(3))
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}
