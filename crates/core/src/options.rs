//! Candidate values for a placeholder.
//!
//! An [`OptionStream`] is a lazy, finite sequence of option strings. Static
//! options are yielded from memory; an `options_cmd` is run through `sh -c`
//! and its standard output is yielded line by line while the command is still
//! running, so a finder can display the first results right away.
//!
//! Failures of the options command never fail the session: they are logged
//! and the sequence ends early.

use std::io::{BufRead, BufReader};
use std::process::{Child, ExitStatus, Stdio};

use log::{debug, warn};

use crate::command_definitions::{OptionSource, VarDefinition};
use crate::execution::shell_command;

type Lines = Box<dyn Iterator<Item = String> + Send>;

/// Lazy sequence of option strings, see the module docs.
pub struct OptionStream {
    lines: Lines,
    producer: Option<ProducerGuard>,
}

impl OptionStream {
    pub fn open(definition: &VarDefinition) -> Self {
        match definition.option_source() {
            OptionSource::Static(options) => Self::from_values(options.to_vec()),
            OptionSource::Command(command) => Self::from_command(command),
            OptionSource::Empty => Self::empty(),
        }
    }

    pub fn empty() -> Self {
        Self::from_values(Vec::new())
    }

    pub fn from_values(values: Vec<String>) -> Self {
        Self {
            lines: Box::new(values.into_iter()),
            producer: None,
        }
    }

    /// Spawns `sh -c <command>` and streams its non-empty, trimmed stdout lines.
    /// Invalid UTF-8 is replaced rather than ending the stream; stderr is discarded.
    pub fn from_command(command: &str) -> Self {
        let mut shell = shell_command(command);
        shell
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            // The finder owns the terminal while options are produced
            .stderr(Stdio::null());

        // Own process group, so closing the stream also stops whatever the
        // command spawned.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            shell.process_group(0);
        }

        let mut child = match shell.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to start options command `{command}`: {e}");
                return Self::empty();
            }
        };

        let Some(stdout) = child.stdout.take() else {
            warn!("Options command `{command}` has no stdout");
            return Self {
                lines: Box::new(std::iter::empty()),
                producer: Some(ProducerGuard::new(command, child)),
            };
        };

        debug!("Started options command `{command}` (pid {})", child.id());

        let description = command.to_string();
        let lines = BufReader::new(stdout)
            .split(b'\n')
            .map_while(move |line| match line {
                Ok(line) => Some(line),
                Err(e) => {
                    warn!("Failed reading output of options command `{description}`: {e}");
                    None
                }
            })
            .map(|line| String::from_utf8_lossy(&line).trim().to_string())
            .filter(|line| !line.is_empty());

        Self {
            lines: Box::new(lines),
            producer: Some(ProducerGuard::new(command, child)),
        }
    }

    /// Splits the stream into its lines and the guard of the producing
    /// process. The lines can be consumed on another thread while the guard
    /// stays with the caller, who closes it once the consumer is done.
    pub fn into_parts(self) -> (Lines, ProducerGuard) {
        let Self { lines, producer } = self;
        (lines, producer.unwrap_or_default())
    }
}

impl Iterator for OptionStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next = self.lines.next();
        if next.is_none() {
            if let Some(producer) = self.producer.take() {
                producer.finish();
            }
        }
        next
    }
}

/// Owns the child process behind a command-backed [`OptionStream`]. The
/// child is reaped exactly once: by [`finish`](Self::finish),
/// [`close`](Self::close) or on drop.
#[derive(Default)]
pub struct ProducerGuard {
    command: String,
    child: Option<Child>,
}

impl ProducerGuard {
    fn new(command: &str, child: Child) -> Self {
        Self {
            command: command.to_string(),
            child: Some(child),
        }
    }

    /// Whether a child process is still owned by this guard.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.child.is_some()
    }

    /// Waits for a producer whose output has been fully read.
    pub fn finish(mut self) {
        if let Some(mut child) = self.child.take() {
            match child.wait() {
                Ok(status) => self.log_status(status, false),
                Err(e) => warn!("Failed waiting for options command `{}`: {e}", self.command),
            }
        }
    }

    /// Stops the producer whether or not its output was read to the end.
    pub fn close(mut self) {
        self.terminate();
    }

    fn terminate(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        kill_process_group(&mut child);

        match child.wait() {
            Ok(status) => self.log_status(status, true),
            Err(e) => warn!("Failed waiting for options command `{}`: {e}", self.command),
        }
    }

    fn log_status(&self, status: ExitStatus, killed: bool) {
        if status.success() {
            debug!("Options command `{}` finished", self.command);
        } else if killed && status.code().is_none() {
            debug!("Options command `{}` stopped before it finished", self.command);
        } else {
            warn!("Options command `{}` finished with {status}", self.command);
        }
    }
}

impl Drop for ProducerGuard {
    fn drop(&mut self) {
        self.terminate();
    }
}

#[cfg(unix)]
fn kill_process_group(child: &mut Child) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    // The child has not been reaped yet, so its pid still names its group.
    let Ok(pid) = i32::try_from(child.id()) else {
        let _ = child.kill();
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        debug!("Could not signal options process group {pid}: {e}");
    }
}

#[cfg(not(unix))]
fn kill_process_group(child: &mut Child) {
    let _ = child.kill();
}
