use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered map of placeholder name to its constraints.
pub type VarDefinitions = IndexMap<String, VarDefinition>;

fn default_true() -> bool {
    true
}

/// Constraints and option source for a single placeholder.
///
/// Any field missing from the YAML takes the same value as a placeholder
/// that has no definition at all: a required freeform prompt.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VarDefinition {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub options_cmd: Option<String>,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub delimiter: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default = "default_true")]
    pub allow_freeform: bool,
}

impl Default for VarDefinition {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            options_cmd: None,
            multi: false,
            delimiter: String::new(),
            required: true,
            allow_freeform: true,
        }
    }
}

/// Where the candidate values of a placeholder come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource<'a> {
    Static(&'a [String]),
    Command(&'a str),
    Empty,
}

impl VarDefinition {
    /// Static options take priority over `options_cmd`; empty values count as absent.
    #[must_use]
    pub fn option_source(&self) -> OptionSource<'_> {
        if !self.options.is_empty() {
            return OptionSource::Static(&self.options);
        }

        match self.options_cmd.as_deref().map(str::trim) {
            Some(command) if !command.is_empty() => OptionSource::Command(command),
            _ => OptionSource::Empty,
        }
    }

    #[must_use]
    pub fn has_conflicting_sources(&self) -> bool {
        !self.options.is_empty()
            && self
                .options_cmd
                .as_deref()
                .is_some_and(|command| !command.trim().is_empty())
    }
}

/// Separator shown between selections in a preview. An empty delimiter
/// previews with a single space; the accepted value uses the raw delimiter.
#[must_use]
pub fn effective_delimiter(delimiter: &str) -> &str {
    if delimiter.is_empty() {
        " "
    } else {
        delimiter
    }
}

impl Display for VarDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.option_source() {
            OptionSource::Static(options) => write!(formatter, "{} options", options.len())?,
            OptionSource::Command(command) => write!(formatter, "options from `{command}`")?,
            OptionSource::Empty => formatter.write_str("no options")?,
        }

        if self.multi {
            write!(formatter, ", multi (`{}`)", self.delimiter)?;
        }
        if self.required {
            formatter.write_str(", required")?;
        }
        if self.allow_freeform {
            formatter.write_str(", freeform")?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub title: String,
    pub cmd: String,
    #[serde(default)]
    pub vars: VarDefinitions,
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            formatter.write_str(&self.cmd)
        } else {
            formatter.write_str(&self.title)
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, rename = "vars")]
    pub global_vars: VarDefinitions,
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
}

impl Config {
    /// Effective definitions for a command: globals overlaid by the command's own vars.
    #[must_use]
    pub fn effective_vars(&self, command: &CommandDefinition) -> VarDefinitions {
        merge_vars(&self.global_vars, &command.vars)
    }
}

/// Overlays `command_vars` on top of `global_vars`. Command entries replace
/// global ones as a whole; fields are not merged individually.
#[must_use]
pub fn merge_vars(global_vars: &VarDefinitions, command_vars: &VarDefinitions) -> VarDefinitions {
    let mut merged = global_vars.clone();
    for (name, definition) in command_vars {
        merged.insert(name.clone(), definition.clone());
    }
    merged
}
