//! Adapter over the external fuzzy finder.
//!
//! Callers describe one finder invocation with a [`FinderRequest`]: the
//! candidate lines, the per-call arguments and extra environment for the
//! shell snippets the finder runs. A [`Finder`] runs it to completion and
//! reports what the user accepted.

pub mod args;
mod fzf;

pub use fzf::Fzf;

use cmdmark_core::error::{Error, Result};
use cmdmark_core::options::OptionStream;

/// Exit code of a `become:` action that asks for direct execution. fzf
/// itself only exits with 0, 1, 2, 126, 127 or 130.
pub const EXIT_EXECUTE: i32 = 90;

/// Separator of the fields in encoded finder input lines.
pub const FIELD_DELIMITER: &str = "\t";

/// Exit code of fzf when it was aborted (Ctrl-C).
const EXIT_INTERRUPTED: i32 = 130;

/// How a finder invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Accepted,
    Interrupted,
    /// A direct-execute binding ended the finder; the accepted lines are its payload.
    Execute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOutput {
    pub selected: Vec<String>,
    pub disposition: Disposition,
}

impl FinderOutput {
    #[must_use]
    pub fn interrupted() -> Self {
        Self {
            selected: Vec::new(),
            disposition: Disposition::Interrupted,
        }
    }
}

pub struct FinderRequest {
    pub input: OptionStream,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// An interactive fuzzy finder.
pub trait Finder {
    /// Runs the finder until the user accepts, skips or interrupts.
    ///
    /// # Errors
    ///
    /// Returns an error if the finder cannot be launched or rejects its arguments.
    fn run(&self, request: FinderRequest) -> Result<FinderOutput>;
}

/// Standard arguments applied to every invocation, before the per-call ones.
#[must_use]
pub fn standard_args() -> Vec<String> {
    vec![
        args::binding("ctrl-c:abort"),
        args::header_label("Keybindings"),
        args::preview_window(&["wrap", "down:3"]),
        args::preview_label("Command Preview"),
        args::style("full"),
        args::delimiter(FIELD_DELIMITER),
        args::with_shell("sh -c"),
    ]
}

/// Maps the finder's exit code and output lines to a [`FinderOutput`].
/// `None` means the finder was killed by a signal.
///
/// # Errors
///
/// Returns [`Error::FinderExit`] for exit codes that signal a finder failure.
pub fn classify_exit(code: Option<i32>, selected: Vec<String>) -> Result<FinderOutput> {
    match code {
        // 1 is "no match", which is a valid, empty acceptance
        Some(0 | 1) => Ok(FinderOutput {
            selected,
            disposition: Disposition::Accepted,
        }),
        Some(EXIT_EXECUTE) => Ok(FinderOutput {
            selected,
            disposition: Disposition::Execute,
        }),
        Some(EXIT_INTERRUPTED) | None => Ok(FinderOutput::interrupted()),
        Some(code) => Err(Error::FinderExit(code)),
    }
}
