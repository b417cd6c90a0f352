use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::{NoExpand, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_-]+)\s*\}\}").expect("Invalid placeholder regex")
});

fn placeholder_regex(variable_name: &str) -> Regex {
    Regex::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(variable_name)))
        .expect("Escaped placeholder regex is always valid")
}

/// Find all placeholder names in a template, in order of first occurrence.
#[must_use]
pub fn extract_variable_names(template: &str) -> IndexSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Replace every `{{ variable_name }}` in `template` with `value`, verbatim.
#[must_use]
pub fn replace_placeholder(template: &str, variable_name: &str, value: &str) -> String {
    placeholder_regex(variable_name)
        .replace_all(template, NoExpand(value))
        .into_owned()
}
