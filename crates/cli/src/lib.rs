//! cmdmark CLI Library
//!
//! This crate provides the command-line interface for cmdmark. It drives the
//! fuzzy finder through command selection and placeholder prompts, and
//! renders the live preview the finder shows while the user types.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`finder`]: Adapter over the external `fzf` finder
//! - [`command_selection`]: The command picker
//! - [`prompt`]: Finder setup and result handling for a single placeholder
//! - [`resolution`]: The session driver tying the pieces together
//! - [`preview`]: The `preview` subcommand the finder calls back into
//!
//! # Examples
//!
//! ```bash
//! # Pick a command, fill in its placeholders and print the result
//! cmdmark search
//!
//! # Use a specific config file
//! cmdmark search -c ~/commands.yaml
//!
//! # What the finder runs on every keystroke
//! cmdmark preview --template 'git checkout {{branch}}' --varName branch \
//!     --required true --allowFreeform false --delimiter '' --query '' -- dev
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod finder;
pub mod preview;
pub mod prompt;
pub mod resolution;
