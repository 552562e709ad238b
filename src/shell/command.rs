//! External program execution.

use crate::error::Result;
use crate::steps::StepCommand;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }

    fn from_status(status: ExitStatus, duration: Duration) -> Self {
        if status.success() {
            Self::success(duration)
        } else {
            Self::failure(status.code(), duration)
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Run a program to completion with inherited stdio.
///
/// Blocks until the child exits; there is no timeout. An error means the
/// program could not be started at all.
pub fn execute(command: &StepCommand, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!("Spawning: {}", command);
    let status = cmd.status()?;
    let duration = start.elapsed();

    log_termination(command, status);

    Ok(CommandResult::from_status(status, duration))
}

#[cfg(unix)]
fn log_termination(command: &StepCommand, status: ExitStatus) {
    use std::os::unix::process::ExitStatusExt;

    if let Some(signal) = status.signal() {
        tracing::warn!("'{}' was terminated by signal {}", command, signal);
    }
}

#[cfg(not(unix))]
fn log_termination(_command: &StepCommand, _status: ExitStatus) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_success_has_zero_code() {
        let result = CommandResult::success(Duration::from_millis(5));
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn result_failure_keeps_code() {
        let result = CommandResult::failure(Some(2), Duration::ZERO);
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }

    #[test]
    fn missing_program_is_an_error() {
        let cmd = StepCommand::program("definitely-not-a-real-program-7f3a");
        let result = execute(&cmd, &CommandOptions::default());
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let cmd = StepCommand::new("sh", ["-c", "exit 0"]);
        let result = execute(&cmd, &CommandOptions::default()).unwrap();
        assert!(result.success);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure_with_code() {
        let cmd = StepCommand::new("sh", ["-c", "exit 3"]);
        let result = execute(&cmd, &CommandOptions::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn signal_termination_has_no_code() {
        let cmd = StepCommand::new("sh", ["-c", "kill -9 $$"]);
        let result = execute(&cmd, &CommandOptions::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();

        let cmd = StepCommand::new("sh", ["-c", "test -f marker"]);
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
        };
        let result = execute(&cmd, &options).unwrap();
        assert!(result.success);
    }
}
