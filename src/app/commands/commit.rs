//! Version-control commit pipeline: ensure-init, stage, commit, conditional push.

use tracing::info;

use crate::domain::{CommitStep, StageError, StageOutcome, WorkingContext};
use crate::ports::{CommandRunner, Invocation};

/// What the commit pipeline did besides committing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// A new repository had to be initialized.
    pub initialized: bool,
    /// The commit was pushed to the configured remote.
    pub pushed: bool,
}

impl CommitReport {
    pub fn summary(&self) -> &'static str {
        match (self.initialized, self.pushed) {
            (true, true) => "new repository, pushed",
            (true, false) => "new repository, no remote",
            (false, true) => "pushed",
            (false, false) => "no remote, not pushed",
        }
    }
}

/// Commit everything in the working context and push when a remote exists.
///
/// Each step runs only after the previous one succeeded. Nothing is rolled
/// back on failure.
pub async fn commit(
    runner: &impl CommandRunner,
    context: &WorkingContext,
    message: &str,
) -> StageOutcome<CommitReport> {
    let initialized = ensure_initialized(runner, context).await?;
    git(runner, context, CommitStep::Add, &["add", "-A"]).await?;
    git(runner, context, CommitStep::Commit, &["commit", "-m", message]).await?;

    let remotes = git(runner, context, CommitStep::Remote, &["remote"]).await?;
    let pushed = if remotes.trim().is_empty() {
        info!("no remote configured, skipping push");
        false
    } else {
        git(runner, context, CommitStep::Push, &["push"]).await?;
        true
    };

    Ok(CommitReport { initialized, pushed })
}

async fn ensure_initialized(
    runner: &impl CommandRunner,
    context: &WorkingContext,
) -> StageOutcome<bool> {
    let check = Invocation::new("git", ["rev-parse", "--is-inside-work-tree"], context.root());
    let inside = matches!(
        runner.run(&check).await,
        Ok(output) if output.success && output.stdout.trim() == "true"
    );
    if inside {
        return Ok(false);
    }

    git(runner, context, CommitStep::Init, &["init"]).await?;
    info!(root = %context.root().display(), "initialized git repository");
    Ok(true)
}

/// Run one git sub-step and return its stdout.
async fn git(
    runner: &impl CommandRunner,
    context: &WorkingContext,
    step: CommitStep,
    args: &[&str],
) -> StageOutcome<String> {
    let invocation = Invocation::new("git", args.iter().copied(), context.root());
    let output = runner
        .run(&invocation)
        .await
        .map_err(|err| StageError::Commit { step, details: err.to_string() })?;

    if output.success {
        Ok(output.stdout)
    } else {
        Err(StageError::Commit { step, details: output.failure_details() })
    }
}
