//! cmdmark Core Library
//!
//! This crate provides the core functionality for cmdmark, an interactive
//! browser for shell command templates. Templates contain `{{name}}`
//! placeholders that are filled in one at a time before the command is
//! printed or executed.
//!
//! # Key Features
//!
//! - **Configuration**: Parse the YAML command library and its placeholder definitions
//! - **Placeholder Templating**: Scan templates and substitute placeholder values
//! - **Options Sources**: Static, command-generated or empty candidate lists
//! - **Preview Rendering**: Pure rendering of a hypothetical substitution
//! - **Error Handling**: Error types for all failure modes
//!
//! # Examples
//!
//! Loading a configuration file and listing the placeholders of each command:
//!
//! ```no_run
//! use cmdmark_core::file_handling::load_config;
//! use cmdmark_core::interpolation::extract_variable_names;
//!
//! let config = load_config("/etc/cmdmark/config.yaml")?;
//! for command in &config.commands {
//!     println!("{command}: {:?}", extract_variable_names(&command.cmd));
//! }
//! # Ok::<(), cmdmark_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod options;
pub mod preview;
