//! Drives a search session from command selection to the final command.

use indexmap::IndexSet;
use log::{debug, info};

use cmdmark_core::command_definitions::{Config, VarDefinition, VarDefinitions};
use cmdmark_core::error::Result;
use cmdmark_core::interpolation::{extract_variable_names, replace_placeholder};

use crate::command_selection::{select_command, CommandChoice};
use crate::finder::Finder;
use crate::prompt::bindings::PromptContext;
use crate::prompt::{prompt_variable, PromptOutcome};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Print the fully substituted command.
    Print(String),
    /// Run the command through `sh -c` instead of printing it.
    Execute(String),
    /// The user quit; nothing is printed.
    Quit,
}

/// Runs a full session: pick a command, then fill in its placeholders.
///
/// `program` is the path of the cmdmark binary, used by the finder to render
/// previews.
///
/// # Errors
///
/// Returns an error if the finder fails or returns an unknown command.
pub fn resolve<F: Finder + ?Sized>(config: &Config, finder: &F, program: &str) -> Result<Resolution> {
    let command_variables: Vec<IndexSet<String>> = config
        .commands
        .iter()
        .map(|command| extract_variable_names(&command.cmd))
        .collect();

    let index = match select_command(finder, &config.commands, &command_variables)? {
        CommandChoice::Quit => return Ok(Resolution::Quit),
        CommandChoice::Execute(index) => {
            return Ok(Resolution::Execute(config.commands[index].cmd.clone()));
        }
        CommandChoice::Index(index) => index,
    };

    let command = &config.commands[index];
    info!("Selected `{command}`");

    let vars = config.effective_vars(command);
    fill_placeholders(finder, program, &command.cmd, &command_variables[index], &vars)
}

/// Prompts for each placeholder in order, substituting every value before the
/// next prompt. Placeholders without a definition get a required freeform prompt.
///
/// # Errors
///
/// Returns an error if the finder fails.
pub fn fill_placeholders<F: Finder + ?Sized>(
    finder: &F,
    program: &str,
    template: &str,
    variable_names: &IndexSet<String>,
    vars: &VarDefinitions,
) -> Result<Resolution> {
    let mut result = template.to_string();
    let default_definition = VarDefinition::default();

    for (index, variable_name) in variable_names.iter().enumerate() {
        let definition = vars.get(variable_name).unwrap_or(&default_definition);
        let context = PromptContext {
            program,
            template: &result,
            variable_name,
            definition,
            is_last: index + 1 == variable_names.len(),
        };

        match prompt_variable(finder, &context)? {
            PromptOutcome::Interrupted => {
                debug!("Interrupted at `{variable_name}`");
                return Ok(Resolution::Quit);
            }
            PromptOutcome::Execute(command) => return Ok(Resolution::Execute(command)),
            PromptOutcome::Value(value) => {
                result = replace_placeholder(&result, variable_name, &value);
                debug!("Substituted `{variable_name}`: `{result}`");
            }
        }
    }

    Ok(Resolution::Print(result))
}
