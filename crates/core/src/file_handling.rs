//! File handling and validation for cmdmark configuration.
//!
//! This module reads the YAML configuration file and checks the parsed
//! commands before a session starts.

use std::fs::File;

use log::{debug, warn};

use crate::command_definitions::{CommandDefinition, Config};
use crate::error::{Error, Result};
use crate::interpolation::extract_variable_names;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn warn_about_definitions(config: &Config) {
    for (name, definition) in &config.global_vars {
        if definition.has_conflicting_sources() {
            warn!("Global var `{name}` has both `options` and `options_cmd`; using `options`");
        }
    }

    for command in &config.commands {
        let variables = extract_variable_names(&command.cmd);
        for (name, definition) in &command.vars {
            if definition.has_conflicting_sources() {
                warn!("Var `{name}` of `{command}` has both `options` and `options_cmd`; using `options`");
            }
            if !variables.contains(name) {
                warn!("Var `{name}` of `{command}` is not used by its template");
            }
        }
    }
}

fn validate_commands(commands: &[CommandDefinition]) -> Result<()> {
    for (index, command) in commands.iter().enumerate() {
        if command.cmd.trim().is_empty() {
            return Err(Error::EmptyCommandTemplate(index, command.title.clone()));
        }
    }

    Ok(())
}

/// Loads and validates the configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The configuration defines no commands
/// - A command has an empty template
///
/// # Examples
///
/// ```no_run
/// use cmdmark_core::file_handling::load_config;
///
/// let config = load_config("/etc/cmdmark/config.yaml")?;
/// println!("Loaded {} commands", config.commands.len());
/// # Ok::<(), cmdmark_core::error::Error>(())
/// ```
pub fn load_config(config_path: &str) -> Result<Config> {
    let config_reader = get_reader("config", config_path)?;

    let config: Config = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    if config.commands.is_empty() {
        return Err(Error::empty_command_definition(config_path.to_string()));
    }

    validate_commands(&config.commands)?;
    warn_about_definitions(&config);

    debug!(
        "Loaded {} commands and {} global vars from `{config_path}`",
        config.commands.len(),
        config.global_vars.len()
    );

    Ok(config)
}
