use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::config::DEFAULT_SHELL;
use crate::error::Result;

/// Builds `sh -c <command_line>`.
#[must_use]
pub fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new(DEFAULT_SHELL);
    command.arg("-c").arg(command_line);
    command
}

/// Runs a command line through the shell with the terminal attached and
/// returns its exit status.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or waited for.
pub fn execute_command(command_line: &str) -> Result<ExitStatus> {
    info!("Executing `{command_line}`");

    let status = shell_command(command_line)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    info!("`{command_line}` finished with {status}");
    Ok(status)
}

/// Process exit code for a finished child, 128 + signal number when it was
/// killed by a signal.
#[must_use]
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code & 0xff).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
