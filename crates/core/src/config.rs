//! Configuration path utilities for cmdmark.
//!
//! This module resolves which configuration file a session reads, expanding
//! shell shorthands like `~` in paths.

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Config locations tried in order when no path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["~/.config/cmdmark/config.yaml", "/etc/cmdmark/config.yaml"];

/// Shell used for options commands and direct execution.
pub const DEFAULT_SHELL: &str = "sh";

/// Resolves the configuration file path.
///
/// A custom path is used as given (after `~` expansion) without checking that
/// it exists; reading it reports a missing file. Otherwise the first existing
/// entry of [`DEFAULT_CONFIG_PATHS`] is used.
///
/// # Errors
///
/// Returns [`Error::NoConfigFound`] when no custom path is given and none of
/// the default locations exist.
///
/// # Examples
///
/// ```
/// use cmdmark_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yaml".to_string()))?;
/// assert_eq!(custom_path, "/path/to/config.yaml");
/// # Ok::<(), cmdmark_core::error::Error>(())
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> Result<String> {
    if let Some(config_path) = config_path_arg {
        return Ok(shellexpand::tilde(config_path).to_string());
    }

    find_existing(&DEFAULT_CONFIG_PATHS)
}

fn find_existing(candidates: &[&str]) -> Result<String> {
    let expanded: Vec<String> = candidates
        .iter()
        .map(|candidate| shellexpand::tilde(candidate).to_string())
        .collect();

    for path in &expanded {
        if Path::new(path).is_file() {
            return Ok(path.clone());
        }
        debug!("No config at `{path}`");
    }

    Err(Error::NoConfigFound { searched: expanded })
}
