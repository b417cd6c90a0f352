//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate: `search` runs an interactive session, `preview` is the callback the
//! finder runs to render the live preview.

use clap::{ArgAction, Parser, Subcommand};

/// Command-line arguments for the cmdmark CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdmark_cli::cli_args::{Args, Commands};
///
/// let args = Args::parse_from(["cmdmark", "search", "-c", "/tmp/config.yaml"]);
/// assert!(matches!(args.command, Commands::Search(_)));
/// ```
#[derive(Parser, Debug)]
#[command(name = "cmdmark", version, about = "Browse, fill in and run command templates")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the commands of a config file and fill in their placeholders.
    Search(SearchArgs),

    /// Render the preview of a placeholder substitution (run by the finder).
    Preview(PreviewArgs),
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Path to the config file.
    ///
    /// If not provided, `~/.config/cmdmark/config.yaml` and then
    /// `/etc/cmdmark/config.yaml` are tried.
    #[arg(long, short = 'c')]
    pub config: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// Template string containing `{{varName}}` placeholders.
    #[arg(long, allow_hyphen_values = true)]
    pub template: String,

    /// Variable name to replace.
    #[arg(long = "varName")]
    pub var_name: String,

    /// Whether a value is required.
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub required: bool,

    /// Allow the query as a value when nothing is selected.
    #[arg(long = "allowFreeform", action = ArgAction::Set, default_value_t = false)]
    pub allow_freeform: bool,

    /// Delimiter for multiple selections.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub delimiter: String,

    /// The finder's current query.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub query: String,

    /// The finder's current selection.
    pub selections: Vec<String>,
}
