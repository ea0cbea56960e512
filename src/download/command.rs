//! Child process execution for the external downloader.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a command line to completion and captures its output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command[0]` with the remaining elements as arguments.
    async fn run(&self, command: &[String]) -> Result<CommandOutput>;
}

/// Runs commands as real child processes.
///
/// Output is fully buffered and only read once the child exits. There is no
/// timeout: a hung child blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &[String]) -> Result<CommandOutput> {
        let command_line = command.join(" ");
        let (program, args) = command.split_first().ok_or_else(|| Error::ToolInvocation {
            command: command_line.clone(),
            message: "empty command".to_string(),
        })?;

        tracing::info!("Executing: {}", command_line);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::ToolInvocation {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        let output = CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!("Return code of {}: {:?}", command_line, output.exit_code);
        if !output.stdout.trim().is_empty() {
            tracing::debug!("Shell command STDOUT: {}", output.stdout);
        }
        if !output.stderr.trim().is_empty() {
            tracing::debug!("Shell command STDERR: {}", output.stderr);
        }

        Ok(output)
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_captures_exit_code_and_streams() {
        let output = ProcessRunner
            .run(&cmd(&["sh", "-c", "echo out; echo err >&2; exit 3"]))
            .await
            .unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_missing_program_is_invocation_error() {
        let err = ProcessRunner
            .run(&cmd(&["/nonexistent/youtube-dl", "--version"]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolInvocation { .. }));
    }

    #[tokio::test]
    async fn test_empty_command_rejected() {
        assert!(ProcessRunner.run(&[]).await.is_err());
    }
}
