use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, warn};

use cmdmark_core::error::{Error, Result};

use super::{classify_exit, standard_args, Finder, FinderOutput, FinderRequest};

/// Environment variable overriding the fzf executable.
pub const FZF_ENV: &str = "CMDMARK_FZF";

const DEFAULT_FZF: &str = "fzf";

/// The `fzf` executable run as a child process: candidates are written to its
/// stdin, accepted lines are read from its stdout while it draws on the tty.
#[derive(Debug, Clone)]
pub struct Fzf {
    program: PathBuf,
}

impl Fzf {
    /// Finds fzf on `PATH`, or the executable named by `CMDMARK_FZF`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FinderNotFound`] if the executable cannot be found.
    pub fn locate() -> Result<Self> {
        let name = std::env::var(FZF_ENV).unwrap_or_else(|_| DEFAULT_FZF.to_string());
        let program = which::which(&name).map_err(|e| Error::FinderNotFound {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        debug!("Using finder at `{}`", program.display());
        Ok(Self { program })
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Finder for Fzf {
    fn run(&self, request: FinderRequest) -> Result<FinderOutput> {
        let mut args = standard_args();
        args.extend(request.args);
        debug!("Running finder with {args:?}");

        let (lines, producer) = request.input.into_parts();

        let mut child = Command::new(&self.program)
            .args(&args)
            .envs(request.env)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(Error::FinderLaunch)?;

        let feeder = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || {
                for line in lines {
                    if let Err(e) = writeln!(stdin, "{line}") {
                        // The finder exited before reading everything
                        debug!("Stopped feeding finder: {e}");
                        break;
                    }
                }
            })
        });

        let collector = child.stdout.take().map(|stdout| {
            thread::spawn(move || {
                BufReader::new(stdout)
                    .split(b'\n')
                    .map_while(std::result::Result::ok)
                    .map(|line| String::from_utf8_lossy(&line).into_owned())
                    .collect::<Vec<String>>()
            })
        });

        let status = child.wait();

        // Stops a still running options command, which also unblocks the feeder
        producer.close();

        if let Some(feeder) = feeder {
            if feeder.join().is_err() {
                warn!("Finder input thread panicked");
            }
        }
        let selected = match collector.map(thread::JoinHandle::join) {
            Some(Ok(selected)) => selected,
            Some(Err(_)) => {
                warn!("Finder output thread panicked");
                Vec::new()
            }
            None => Vec::new(),
        };

        let status = status?;
        debug!("Finder exited with {status}, {} lines", selected.len());
        classify_exit(status.code(), selected)
    }
}
