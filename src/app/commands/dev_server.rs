//! Editor hand-off and dev-server process control.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, PackageManager, ProcessId, WorkingContext, find_port_owner};
use crate::ports::{CommandRunner, Invocation};

/// Open the working context in the editor (`<editor> .`).
pub async fn open_editor(
    runner: &impl CommandRunner,
    context: &WorkingContext,
    editor_command: &str,
) -> Result<(), AppError> {
    let invocation = Invocation::new(editor_program(editor_command), ["."], context.root());
    let output = runner.run(&invocation).await?;
    if output.success {
        Ok(())
    } else {
        Err(AppError::CommandFailed {
            command: invocation.command_line(),
            details: output.failure_details(),
        })
    }
}

#[cfg(windows)]
fn editor_program(command: &str) -> String {
    // The VS Code launcher is a batch script on Windows.
    if command.contains('.') { command.to_string() } else { format!("{command}.cmd") }
}

#[cfg(not(windows))]
fn editor_program(command: &str) -> String {
    command.to_string()
}

/// Start the dev server detached. Readiness is never awaited.
pub fn start(
    runner: &impl CommandRunner,
    manager: PackageManager,
    context: &WorkingContext,
) -> Result<(), AppError> {
    let invocation = Invocation::new(manager.program(), manager.dev_args(), context.root());
    runner.spawn_detached(&invocation)?;
    info!(command = %invocation, "dev server started");
    Ok(())
}

/// Find the process listening on `port`. `None` when nothing matches.
pub async fn locate(
    runner: &impl CommandRunner,
    cwd: &Path,
    port: u16,
) -> Result<Option<ProcessId>, AppError> {
    let invocation = Invocation::new("netstat", port_listing_args(), cwd);
    let output = runner.run(&invocation).await?;
    // netstat may exit non-zero after printing a usable partial listing.
    if !output.success && output.stdout.is_empty() {
        return Err(AppError::CommandFailed {
            command: invocation.command_line(),
            details: output.failure_details(),
        });
    }
    Ok(find_port_owner(&output.stdout, port))
}

/// Forcefully terminate `pid`.
pub async fn terminate(
    runner: &impl CommandRunner,
    cwd: &Path,
    pid: ProcessId,
) -> Result<(), AppError> {
    let invocation = Invocation::new(kill_program(), kill_args(pid), cwd);
    let output = runner.run(&invocation).await?;
    if output.success {
        info!(%pid, "dev server terminated");
        Ok(())
    } else {
        Err(AppError::CommandFailed {
            command: invocation.command_line(),
            details: output.failure_details(),
        })
    }
}

/// Locate the dev server by port and terminate it when found.
pub async fn stop(
    runner: &impl CommandRunner,
    cwd: &Path,
    port: u16,
) -> Result<Option<ProcessId>, AppError> {
    let Some(pid) = locate(runner, cwd, port).await? else {
        debug!(port, "no process owns the dev server port");
        return Ok(None);
    };
    terminate(runner, cwd, pid).await?;
    Ok(Some(pid))
}

#[cfg(windows)]
fn port_listing_args() -> [&'static str; 1] {
    ["-ano"]
}

#[cfg(not(windows))]
fn port_listing_args() -> [&'static str; 1] {
    ["-tlnp"]
}

#[cfg(windows)]
fn kill_program() -> &'static str {
    "taskkill"
}

#[cfg(not(windows))]
fn kill_program() -> &'static str {
    "kill"
}

#[cfg(windows)]
fn kill_args(pid: ProcessId) -> Vec<String> {
    vec!["/F".to_string(), "/PID".to_string(), pid.to_string()]
}

#[cfg(not(windows))]
fn kill_args(pid: ProcessId) -> Vec<String> {
    vec!["-9".to_string(), pid.to_string()]
}
