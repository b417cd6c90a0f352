use cmdmark_core::error::Result;
use cmdmark_core::preview::{render_preview, PreviewRequest};

use crate::cli_args::PreviewArgs;

/// Output of the `preview` subcommand for the given arguments.
///
/// # Errors
///
/// Returns an error when the placeholder is required and no value is possible.
pub fn preview_output(args: &PreviewArgs) -> Result<String> {
    render_preview(&PreviewRequest {
        template: &args.template,
        variable_name: &args.var_name,
        required: args.required,
        allow_freeform: args.allow_freeform,
        delimiter: &args.delimiter,
        query: &args.query,
        selections: &args.selections,
    })
}
