//! Package manager detection cascade and dependency installation.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{PackageManager, StageError, StageOutcome, WorkingContext};
use crate::ports::{CommandOutput, CommandRunner, Invocation, Prompter};

/// Pick the package manager for this run.
///
/// The preferred manager wins when its version check succeeds. Otherwise the
/// operator may install it globally; a declined or failed installation falls
/// back to the baseline manager. Detection never fails the run.
pub async fn detect(
    runner: &impl CommandRunner,
    prompter: &impl Prompter,
    cwd: &Path,
) -> PackageManager {
    let preferred = PackageManager::PREFERRED;
    if is_available(runner, preferred, cwd).await {
        info!(manager = %preferred, "package manager available");
        return preferred;
    }

    let question = format!("{} is not installed. Install it globally now?", preferred);
    let accepted = match prompter.confirm(&question, false) {
        Ok(accepted) => accepted,
        Err(err) => {
            warn!(error = %err, "package manager prompt failed");
            false
        }
    };

    if accepted && install_globally(runner, preferred, cwd).await {
        return preferred;
    }

    info!(manager = %PackageManager::BASELINE, "falling back to baseline package manager");
    PackageManager::BASELINE
}

async fn is_available(runner: &impl CommandRunner, manager: PackageManager, cwd: &Path) -> bool {
    let invocation = Invocation::new(manager.program(), manager.version_args(), cwd);
    matches!(runner.run(&invocation).await, Ok(output) if output.success)
}

async fn install_globally(
    runner: &impl CommandRunner,
    manager: PackageManager,
    cwd: &Path,
) -> bool {
    let baseline = PackageManager::BASELINE;
    let invocation = Invocation::new(baseline.program(), manager.global_install_args(), cwd);
    match runner.run(&invocation).await {
        Ok(output) if output.success => true,
        Ok(output) => {
            warn!(manager = %manager, details = %output.failure_details(), "global install failed");
            false
        }
        Err(err) => {
            warn!(manager = %manager, error = %err, "global install could not run");
            false
        }
    }
}

#[derive(Serialize)]
struct InstallFailure<'a> {
    command: String,
    #[serde(flatten)]
    output: &'a CommandOutput,
}

/// Install the project's dependencies inside the working context.
pub async fn install(
    runner: &impl CommandRunner,
    manager: PackageManager,
    context: &WorkingContext,
) -> StageOutcome<()> {
    let invocation = Invocation::new(manager.program(), manager.install_args(), context.root());

    match runner.run(&invocation).await {
        Ok(output) if output.success => Ok(()),
        Ok(output) => {
            let failure = InstallFailure { command: invocation.command_line(), output: &output };
            let payload = serde_json::to_string_pretty(&failure)
                .unwrap_or_else(|_| output.failure_details());
            Err(StageError::DependencyInstall { manager, payload })
        }
        Err(err) => Err(StageError::DependencyInstall { manager, payload: err.to_string() }),
    }
}
