//! Picking a command from the library.
//!
//! Each command becomes one tab-separated finder line:
//!
//! | field | content                                         |
//! |-------|-------------------------------------------------|
//! | 1     | index of the command, returned on acceptance    |
//! | 2     | title, the only field shown in the list         |
//! | 3     | template, shown in the preview pane             |
//! | 4     | input label listing the usable key-bindings     |
//! | 5     | action bound to Ctrl-E for this command         |

pub mod types;

pub use types::CommandChoice;

use indexmap::IndexSet;
use log::debug;

use cmdmark_core::command_definitions::CommandDefinition;
use cmdmark_core::error::{Error, Result};
use cmdmark_core::options::OptionStream;

use crate::finder::{args, Disposition, Finder, FinderRequest, EXIT_EXECUTE, FIELD_DELIMITER};

const QUIT_LABEL: &str = "Ctrl-C: Quit";
const EXECUTE_LABEL: &str = "Ctrl-E: Execute";

/// Keeps a value on one finder line and inside its field.
fn flatten_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// Encodes one command as a finder input line.
#[must_use]
pub fn format_command_line(index: usize, command: &CommandDefinition, variable_count: usize) -> String {
    let mut input_label = vec![QUIT_LABEL];
    let mut execute_action = "ignore".to_string();

    // Without placeholders, the command can be run directly
    if variable_count == 0 {
        input_label.push(EXECUTE_LABEL);
        execute_action = format!("become:echo {{1}} && exit {EXIT_EXECUTE}");
    }

    [
        index.to_string(),
        flatten_field(&command.title),
        flatten_field(&command.cmd),
        input_label.join(" | "),
        execute_action,
    ]
    .join(FIELD_DELIMITER)
}

fn picker_args() -> Vec<String> {
    vec![
        args::with_nth("2"),
        args::accept_nth("1"),
        args::preview("printf '%s\\n' {3}"),
        args::binding("focus:transform-input-label:echo {4}"),
        args::binding("ctrl-e:transform:echo {5}"),
        args::list_label("Commands"),
        args::input_label(QUIT_LABEL),
    ]
}

fn parse_index(selection: &str, command_count: usize) -> Result<usize> {
    let index: usize = selection
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSelection(selection.to_string()))?;

    if index >= command_count {
        return Err(Error::CommandIndexOutOfRange(index));
    }

    Ok(index)
}

/// Shows the command picker.
///
/// `command_variables[i]` holds the placeholders of `commands[i]`.
///
/// # Errors
///
/// Returns an error if the finder fails or returns a line that is not the
/// index of a command.
pub fn select_command<F: Finder + ?Sized>(
    finder: &F,
    commands: &[CommandDefinition],
    command_variables: &[IndexSet<String>],
) -> Result<CommandChoice> {
    let lines = commands
        .iter()
        .zip(command_variables)
        .enumerate()
        .map(|(index, (command, variables))| format_command_line(index, command, variables.len()))
        .collect();

    let output = finder.run(FinderRequest {
        input: OptionStream::from_values(lines),
        args: picker_args(),
        env: Vec::new(),
    })?;

    let Some(selection) = output.selected.first() else {
        debug!("No command selected");
        return Ok(CommandChoice::Quit);
    };

    match output.disposition {
        Disposition::Interrupted => Ok(CommandChoice::Quit),
        Disposition::Accepted => Ok(CommandChoice::Index(parse_index(selection, commands.len())?)),
        Disposition::Execute => Ok(CommandChoice::Execute(parse_index(selection, commands.len())?)),
    }
}
