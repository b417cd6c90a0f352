//! Session tests with a scripted finder standing in for fzf.
//!
//! Each test queues the finder results a user would produce and checks both
//! the final resolution and what every finder invocation was given.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;

use cmdmark_cli::finder::{Disposition, Finder, FinderOutput, FinderRequest};
use cmdmark_cli::prompt::bindings::{EXECUTE_ENV, TEMPLATE_ENV};
use cmdmark_cli::resolution::{resolve, Resolution};
use cmdmark_core::command_definitions::Config;
use cmdmark_core::error::Result;
use cmdmark_core::file_handling::load_config;
use tempfile::NamedTempFile;

const PROGRAM: &str = "/usr/local/bin/cmdmark";

struct RecordedCall {
    args: Vec<String>,
    env: Vec<(String, String)>,
    input: Vec<String>,
}

impl RecordedCall {
    fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn can_execute(&self) -> bool {
        self.args.iter().any(|a| a.starts_with("--bind=ctrl-e:"))
    }
}

#[derive(Default)]
struct ScriptedFinder {
    responses: RefCell<VecDeque<FinderOutput>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedFinder {
    fn new() -> Self {
        Self::default()
    }

    fn then(self, disposition: Disposition, selected: &[&str]) -> Self {
        self.responses.borrow_mut().push_back(FinderOutput {
            selected: selected.iter().map(ToString::to_string).collect(),
            disposition,
        });
        self
    }

    fn accept(self, selected: &[&str]) -> Self {
        self.then(Disposition::Accepted, selected)
    }

    fn calls(&self) -> std::cell::Ref<'_, Vec<RecordedCall>> {
        self.calls.borrow()
    }
}

impl Finder for ScriptedFinder {
    fn run(&self, request: FinderRequest) -> Result<FinderOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            args: request.args,
            env: request.env,
            input: request.input.collect(),
        });
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("unexpected finder invocation"))
    }
}

fn config(yaml: &str) -> Config {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml}").unwrap();
    load_config(temp_file.path().to_str().unwrap()).unwrap()
}

#[test]
fn test_no_placeholder_command_executes() {
    let config = config("commands:\n  - title: ls\n    cmd: ls -la\n");
    let finder = ScriptedFinder::new().then(Disposition::Execute, &["0"]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Execute("ls -la".to_string()));
    let calls = finder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].input,
        vec!["0\tls\tls -la\tCtrl-C: Quit | Ctrl-E: Execute\tbecome:echo {1} && exit 90"]
    );
}

#[test]
fn test_static_options_single_select() {
    let config = config(
        r#"
commands:
  - title: checkout
    cmd: "git checkout {{branch}}"
    vars:
      branch:
        options: ["main", "dev"]
        required: true
        allow_freeform: false
        multi: false
"#,
    );
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&["dev"]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Print("git checkout dev".to_string()));
    let calls = finder.calls();
    assert_eq!(calls.len(), 2);
    let prompt = &calls[1];
    assert_eq!(prompt.input, vec!["main", "dev"]);
    assert!(prompt.has_arg("--prompt=Select branch: "));
    assert!(prompt.has_arg("--bind=enter:accept-non-empty"));
    assert!(prompt.has_arg("--bind=esc:ignore"));
    assert!(!prompt.has_arg("--multi"));
    assert!(prompt.can_execute());
}

#[test]
fn test_dynamic_options_multi_select() {
    let config = config(
        r#"
commands:
  - title: cat
    cmd: "cat {{file}}"
    vars:
      file:
        options_cmd: "printf 'a\nb\nc\n'"
        multi: true
        delimiter: ","
        required: true
        allow_freeform: false
"#,
    );
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&["a", "c"]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Print("cat a,c".to_string()));
    let calls = finder.calls();
    assert_eq!(calls[1].input, vec!["a", "b", "c"]);
    assert!(calls[1].has_arg("--multi"));
}

#[test]
fn test_freeform_fallback() {
    let config = config(
        r#"
commands:
  - title: echo
    cmd: "echo {{msg}}"
    vars:
      msg:
        options: []
        options_cmd: ""
        required: true
        allow_freeform: true
"#,
    );
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&["hello world"]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Print("echo hello world".to_string()));
    let calls = finder.calls();
    assert!(calls[1].input.is_empty());
    assert!(calls[1].has_arg("--prompt=Enter {{msg}}: "));
}

#[test]
fn test_multi_placeholder_walk_preserves_order() {
    let config = config("commands:\n  - title: scp\n    cmd: \"scp {{src}} {{dst}}\"\n");
    let finder = ScriptedFinder::new()
        .accept(&["0"])
        .accept(&["./a"])
        .accept(&["h:/b"]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Print("scp ./a h:/b".to_string()));
    let calls = finder.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].env_value(TEMPLATE_ENV), Some("scp {{src}} {{dst}}"));
    assert_eq!(calls[2].env_value(TEMPLATE_ENV), Some("scp ./a {{dst}}"));
    assert!(!calls[1].can_execute());
    assert!(calls[1].env_value(EXECUTE_ENV).is_none());
    assert!(calls[2].can_execute());
    assert!(calls[2].env_value(EXECUTE_ENV).is_some());
}

#[test]
fn test_interrupt_yields_no_output() {
    let config = config("commands:\n  - title: scp\n    cmd: \"scp {{src}} {{dst}}\"\n");
    let finder = ScriptedFinder::new()
        .accept(&["0"])
        .then(Disposition::Interrupted, &[]);

    let resolution = resolve(&config, &finder, PROGRAM).unwrap();

    assert_eq!(resolution, Resolution::Quit);
    assert_eq!(finder.calls().len(), 2);
}

#[test]
fn test_interrupt_at_picker() {
    let config = config("commands:\n  - title: ls\n    cmd: ls\n");
    let finder = ScriptedFinder::new().then(Disposition::Interrupted, &[]);
    assert_eq!(resolve(&config, &finder, PROGRAM).unwrap(), Resolution::Quit);
}

#[test]
fn test_empty_picker_selection_quits() {
    let config = config("commands:\n  - title: ls\n    cmd: ls\n");
    let finder = ScriptedFinder::new().accept(&[]);
    assert_eq!(resolve(&config, &finder, PROGRAM).unwrap(), Resolution::Quit);
}

#[test]
fn test_picker_selects_by_index() {
    let config = config(
        "commands:\n  - title: same\n    cmd: ls\n  - title: same\n    cmd: \"echo {{x}}\"\n",
    );
    let finder = ScriptedFinder::new().accept(&["1"]).accept(&["hi"]);
    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Print("echo hi".to_string())
    );
}

#[test]
fn test_direct_execute_from_last_prompt() {
    let config = config("commands:\n  - title: echo\n    cmd: \"echo {{msg}}\"\n");
    let finder = ScriptedFinder::new()
        .accept(&["0"])
        .then(Disposition::Execute, &["echo hi"]);

    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Execute("echo hi".to_string())
    );
}

#[test]
fn test_skipped_optional_placeholder_is_empty() {
    let config = config(
        r#"
commands:
  - title: ls
    cmd: "ls {{flags}} ."
    vars:
      flags:
        required: false
"#,
    );
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&[]);

    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Print("ls  .".to_string())
    );
    assert!(finder.calls()[1].has_arg("--bind=esc:become:true"));
}

#[test]
fn test_command_vars_override_globals() {
    let config = config(
        r#"
vars:
  remote:
    options: ["origin"]
  branch:
    options: ["main"]
commands:
  - title: push
    cmd: "git push {{remote}} {{branch}}"
    vars:
      branch:
        options: ["dev", "feature"]
"#,
    );
    let finder = ScriptedFinder::new()
        .accept(&["0"])
        .accept(&["origin"])
        .accept(&["feature"]);

    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Print("git push origin feature".to_string())
    );
    let calls = finder.calls();
    assert_eq!(calls[1].input, vec!["origin"]);
    assert_eq!(calls[2].input, vec!["dev", "feature"]);
}

#[test]
fn test_undefined_placeholder_is_required_freeform() {
    let config = config("commands:\n  - title: ping\n    cmd: \"ping {{host}}\"\n");
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&["localhost"]);

    resolve(&config, &finder, PROGRAM).unwrap();

    let calls = finder.calls();
    assert!(calls[1].has_arg("--prompt=Enter {{host}}: "));
    assert!(calls[1].has_arg("--bind=esc:ignore"));
    assert!(calls[1]
        .args
        .iter()
        .any(|a| a.starts_with("--bind=enter:transform:")));
}

#[test]
fn test_values_are_not_re_expanded() {
    let config = config("commands:\n  - title: t\n    cmd: \"echo {{a}} {{b}}\"\n");
    let finder = ScriptedFinder::new()
        .accept(&["0"])
        .accept(&["1"])
        .accept(&["{{a}}"]);

    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Print("echo 1 {{a}}".to_string())
    );
    assert_eq!(finder.calls().len(), 3);
}

#[test]
fn test_multi_select_without_delimiter_concatenates() {
    let config = config(
        r#"
commands:
  - title: flags
    cmd: "tar -{{flags}}f out.tar ."
    vars:
      flags:
        options: ["c", "v", "z"]
        multi: true
        allow_freeform: false
"#,
    );
    let finder = ScriptedFinder::new().accept(&["0"]).accept(&["c", "z"]);

    assert_eq!(
        resolve(&config, &finder, PROGRAM).unwrap(),
        Resolution::Print("tar -czf out.tar .".to_string())
    );
}
