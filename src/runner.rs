//! External process execution
//!
//! The command is spawned directly with its argument vector, no shell in
//! between. Output is captured whole and handed back regardless of the exit
//! status. A program that cannot be started yields the output a shell would
//! have produced for it.

use crate::command::MemaCommand;
use crate::types::CommandOutput;
use std::io;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Shell status for a command that was not found
pub const STATUS_NOT_FOUND: i32 = 127;
/// Shell status for a command found but not executable
pub const STATUS_NOT_EXECUTABLE: i32 = 126;

/// Runs a command to completion and captures its output
pub trait Executor {
    fn execute(&self, command: &MemaCommand) -> CommandOutput;
}

/// Executor backed by `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, command: &MemaCommand) -> CommandOutput {
        debug!(program = %command.program, args = command.args.len(), "spawning");

        let output = match Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!(program = %command.program, error = %e, "failed to start external tool");
                return spawn_failure_output(&command.program, &e);
            }
        };

        let captured = CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        };

        if captured.success() {
            debug!(program = %command.program, "finished");
        } else {
            warn!(program = %command.program, status = ?captured.status, "external tool exited unsuccessfully");
        }

        captured
    }
}

/// Output standing in for a program that never started
///
/// Mirrors `sh`: status 127 and `command not found` for a missing program,
/// 126 plus the io error text for anything else.
#[must_use]
pub fn spawn_failure_output(program: &str, error: &io::Error) -> CommandOutput {
    let (status, message) = match error.kind() {
        io::ErrorKind::NotFound => (STATUS_NOT_FOUND, format!("{program}: command not found\n")),
        _ => (STATUS_NOT_EXECUTABLE, format!("{program}: {error}\n")),
    };

    CommandOutput {
        status: Some(status),
        stdout: Vec::new(),
        stderr: message.into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_reads_like_a_shell() {
        let error = io::Error::from(io::ErrorKind::NotFound);

        let output = spawn_failure_output("3dMEMA", &error);

        assert_eq!(output.status, Some(127));
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, b"3dMEMA: command not found\n");
    }

    #[test]
    fn test_permission_denied_keeps_error_text() {
        let error = io::Error::from(io::ErrorKind::PermissionDenied);

        let output = spawn_failure_output("./3dMEMA", &error);

        assert_eq!(output.status, Some(126));
        assert_eq!(output.stderr, format!("./3dMEMA: {error}\n").into_bytes());
    }
}
