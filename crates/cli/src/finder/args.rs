//! Spellings of the fzf command-line options used by cmdmark.

fn arg(key: &str, values: &[&str]) -> String {
    if values.is_empty() {
        format!("--{key}")
    } else {
        format!("--{key}={}", values.join(","))
    }
}

pub fn multi() -> String {
    arg("multi", &[])
}

pub fn binding(value: &str) -> String {
    arg("bind", &[value])
}

pub fn preview(value: &str) -> String {
    arg("preview", &[value])
}

pub fn preview_window(values: &[&str]) -> String {
    arg("preview-window", values)
}

pub fn preview_label(value: &str) -> String {
    arg("preview-label", &[value])
}

pub fn style(value: &str) -> String {
    arg("style", &[value])
}

pub fn delimiter(value: &str) -> String {
    arg("delimiter", &[value])
}

pub fn input_label(value: &str) -> String {
    arg("input-label", &[value])
}

pub fn list_label(value: &str) -> String {
    arg("list-label", &[value])
}

pub fn header_label(value: &str) -> String {
    arg("header-label", &[value])
}

pub fn prompt(value: &str) -> String {
    arg("prompt", &[value])
}

pub fn with_nth(value: &str) -> String {
    arg("with-nth", &[value])
}

pub fn accept_nth(value: &str) -> String {
    arg("accept-nth", &[value])
}

pub fn with_shell(value: &str) -> String {
    arg("with-shell", &[value])
}
