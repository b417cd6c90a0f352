//! Type definitions for command selection.

/// Represents the user's command selection choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandChoice {
    /// Fill in the placeholders of the command at this index.
    Index(usize),
    /// Run the command at this index right away; it has no placeholders.
    Execute(usize),
    Quit,
}
