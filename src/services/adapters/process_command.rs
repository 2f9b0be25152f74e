use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, Invocation};

/// Runs external programs with `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd).stdin(Stdio::null());
        command
    }
}

fn spawn_error(invocation: &Invocation, err: io::Error) -> AppError {
    AppError::CommandSpawn { command: invocation.command_line(), details: err.to_string() }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, AppError> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "running");

        let output =
            Self::command(invocation).output().await.map_err(|e| spawn_error(invocation, e))?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(command = %invocation, success = result.success, code = ?result.code, "finished");
        Ok(result)
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<(), AppError> {
        debug!(command = %invocation, cwd = %invocation.cwd.display(), "spawning detached");

        // The child keeps running after its handle is dropped.
        Self::command(invocation)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| spawn_error(invocation, e))?;
        Ok(())
    }
}
