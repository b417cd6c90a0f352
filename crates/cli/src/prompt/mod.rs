//! Prompting for the value of a single placeholder.

pub mod bindings;

use log::debug;

use cmdmark_core::command_definitions::VarDefinition;
use cmdmark_core::error::Result;
use cmdmark_core::options::OptionStream;

use crate::finder::{Disposition, Finder, FinderRequest};
use bindings::PromptContext;

/// What the user did at a placeholder prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The value to substitute; empty when the placeholder was skipped.
    Value(String),
    /// Direct execution of the fully substituted command.
    Execute(String),
    Interrupted,
}

/// Runs the finder for one placeholder of `template` and returns the chosen value.
///
/// Multiple selections are joined with the placeholder's delimiter as
/// written, so an empty delimiter concatenates them; a query
/// accepted as freeform input is returned as typed.
///
/// # Errors
///
/// Returns an error if the finder fails.
pub fn prompt_variable<F: Finder + ?Sized>(
    finder: &F,
    context: &PromptContext<'_>,
) -> Result<PromptOutcome> {
    debug!(
        "Prompting for `{}` ({})",
        context.variable_name, context.definition
    );

    let invocation = context.invocation();
    let output = finder.run(FinderRequest {
        input: OptionStream::open(context.definition),
        args: invocation.args,
        env: invocation.env,
    })?;

    Ok(match output.disposition {
        Disposition::Interrupted => PromptOutcome::Interrupted,
        Disposition::Execute => PromptOutcome::Execute(output.selected.join("\n")),
        Disposition::Accepted => {
            PromptOutcome::Value(join_selection(&output.selected, context.definition))
        }
    })
}

fn join_selection(selected: &[String], definition: &VarDefinition) -> String {
    selected.join(&definition.delimiter)
}
