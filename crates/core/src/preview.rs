//! Rendering of the live command preview.
//!
//! The finder calls back into `cmdmark preview` on every keystroke; this
//! module holds the pure rendering behind that subcommand.

use crate::command_definitions::effective_delimiter;
use crate::error::{Error, Result};
use crate::interpolation::replace_placeholder;

/// Everything the finder knows about the placeholder being prompted.
#[derive(Debug, Clone, Copy)]
pub struct PreviewRequest<'a> {
    pub template: &'a str,
    pub variable_name: &'a str,
    pub required: bool,
    pub allow_freeform: bool,
    pub delimiter: &'a str,
    pub query: &'a str,
    pub selections: &'a [String],
}

/// Renders `template` as it would look if the current selection or query
/// were accepted for `variable_name`.
///
/// Empty selections are ignored: the finder passes an empty string when no
/// item is focused.
///
/// # Errors
///
/// Returns [`Error::ValueRequired`] when the placeholder is required, nothing
/// is selected and the typed query cannot be used as a freeform value.
///
/// # Examples
///
/// ```
/// use cmdmark_core::preview::{render_preview, PreviewRequest};
///
/// let selections = vec!["a".to_string(), "c".to_string()];
/// let rendered = render_preview(&PreviewRequest {
///     template: "cat {{file}}",
///     variable_name: "file",
///     required: true,
///     allow_freeform: false,
///     delimiter: ",",
///     query: "",
///     selections: &selections,
/// })?;
/// assert_eq!(rendered, "cat a,c");
/// # Ok::<(), cmdmark_core::error::Error>(())
/// ```
pub fn render_preview(request: &PreviewRequest<'_>) -> Result<String> {
    let selections: Vec<&str> = request
        .selections
        .iter()
        .map(String::as_str)
        .filter(|selection| !selection.is_empty())
        .collect();

    let value = if !selections.is_empty() {
        selections.join(effective_delimiter(request.delimiter))
    } else if request.allow_freeform && !request.query.is_empty() {
        request.query.to_string()
    } else if request.query.is_empty() {
        return Ok(request.template.to_string());
    } else if request.required {
        return Err(Error::ValueRequired);
    } else {
        return Ok(request.template.to_string());
    };

    Ok(replace_placeholder(
        request.template,
        request.variable_name,
        &value,
    ))
}
