//! Finder arguments for a single placeholder prompt.
//!
//! All shell snippets the finder runs while prompting live here: the preview
//! command, the value-present check used by `transform:` bindings and the
//! direct-execute action. User text (the partial template and the delimiter)
//! never appears in a snippet; it reaches the finder's shells through
//! environment variables, so the finder's own `{…}` placeholder expansion
//! cannot alter it.

use cmdmark_core::command_definitions::VarDefinition;
use itertools::Itertools;

use crate::finder::{args, EXIT_EXECUTE};

/// Partially substituted template of the current prompt.
pub const TEMPLATE_ENV: &str = "CMDMARK_TEMPLATE";
/// Delimiter of the current prompt.
pub const DELIMITER_ENV: &str = "CMDMARK_DELIMITER";
/// Action run by Ctrl-E on the last prompt.
pub const EXECUTE_ENV: &str = "CMDMARK_EXECUTE";

const QUIT_LABEL: &str = "Ctrl-C: Quit";
const SKIP_LABEL: &str = "Esc: Skip";
const EXECUTE_LABEL: &str = "Ctrl-E: Execute";
const LABEL_SEPARATOR: &str = " | ";

/// Finder arguments and environment for one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInvocation {
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Describes the placeholder being prompted.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    /// Path of the cmdmark binary, called back for previews.
    pub program: &'a str,
    pub template: &'a str,
    pub variable_name: &'a str,
    pub definition: &'a VarDefinition,
    pub is_last: bool,
}

impl PromptContext<'_> {
    #[must_use]
    pub fn prompt_label(&self) -> String {
        if self.definition.allow_freeform {
            format!("Enter {{{{{}}}}}: ", self.variable_name)
        } else {
            format!("Select {}: ", self.variable_name)
        }
    }

    /// Shell test that succeeds when accepting now would produce a value:
    /// something is selected or, with freeform input, the query is non-empty.
    #[must_use]
    pub fn value_present_check(&self) -> String {
        let mut check = r#"[ -n "$(printf %s {+})" ]"#.to_string();
        if self.definition.allow_freeform {
            check.push_str(" || [ -n {q} ]");
        }
        check
    }

    /// Command line of `cmdmark preview` for the finder's current query and selection.
    #[must_use]
    pub fn preview_command(&self) -> String {
        let mut command = vec![
            shell_words::quote(self.program).into_owned(),
            "preview".to_string(),
            "--template".to_string(),
            format!("\"${TEMPLATE_ENV}\""),
            "--varName".to_string(),
            shell_words::quote(self.variable_name).into_owned(),
            format!("--required={}", self.definition.required),
            format!("--allowFreeform={}", self.definition.allow_freeform),
            "--delimiter".to_string(),
            format!("\"${DELIMITER_ENV}\""),
        ];
        command.extend(["--query", "{q}", "--", "{+}"].map(String::from));
        command.join(" ")
    }

    fn enter_binding(&self) -> Option<String> {
        match (self.definition.required, self.definition.allow_freeform) {
            (true, true) => Some(format!(
                "enter:transform:{} && echo accept-or-print-query || echo ignore",
                self.value_present_check()
            )),
            (true, false) => Some("enter:accept-non-empty".to_string()),
            (false, true) => Some("enter:accept-or-print-query".to_string()),
            (false, false) => None,
        }
    }

    fn escape_binding(&self) -> &'static str {
        if self.definition.required {
            "esc:ignore"
        } else {
            // Ends the finder with no output, which is an empty value
            "esc:become:true"
        }
    }

    fn execute_binding(&self) -> String {
        format!(
            "ctrl-e:transform:{} && printf '%s\\n' \"become:${EXECUTE_ENV} && exit {EXIT_EXECUTE}\" || echo ignore",
            self.value_present_check()
        )
    }

    fn keybinding_labels(&self) -> String {
        let mut labels = vec![QUIT_LABEL];
        if !self.definition.required {
            labels.push(SKIP_LABEL);
        }
        labels.iter().join(LABEL_SEPARATOR)
    }

    fn input_label_binding(&self, event: &str, labels: &str) -> String {
        format!(
            "{event}:transform-input-label:{} && echo '{labels}{LABEL_SEPARATOR}{EXECUTE_LABEL}' || echo '{labels}'",
            self.value_present_check()
        )
    }

    /// Composes the finder arguments and environment for this prompt.
    #[must_use]
    pub fn invocation(&self) -> PromptInvocation {
        let mut fzf_args = Vec::new();
        let mut env = vec![
            (TEMPLATE_ENV.to_string(), self.template.to_string()),
            (
                DELIMITER_ENV.to_string(),
                self.definition.delimiter.clone(),
            ),
        ];

        if self.definition.multi {
            fzf_args.push(args::multi());
        }

        if let Some(enter) = self.enter_binding() {
            fzf_args.push(args::binding(&enter));
        }
        fzf_args.push(args::binding(self.escape_binding()));

        fzf_args.push(args::prompt(&self.prompt_label()));
        fzf_args.push(args::preview(&self.preview_command()));

        let labels = self.keybinding_labels();
        fzf_args.push(args::input_label(&labels));

        // Direct execution is only possible once this is the last placeholder
        // and a value is present
        if self.is_last {
            fzf_args.push(args::binding(&self.input_label_binding("focus", &labels)));
            fzf_args.push(args::binding(&self.input_label_binding("change", &labels)));
            fzf_args.push(args::binding(&self.execute_binding()));
            env.push((EXECUTE_ENV.to_string(), self.preview_command()));
        }

        PromptInvocation {
            args: fzf_args,
            env,
        }
    }
}
