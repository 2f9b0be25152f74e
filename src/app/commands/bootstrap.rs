//! The bootstrap orchestrator: sequences the stages and decides which
//! downstream stages run.

use tracing::{info, warn};

use super::commit::{self, CommitReport};
use super::debug::{self, DebugReport};
use super::dev_server;
use super::directory;
use super::materialize::{self, CopyReport};
use super::packages;
use crate::app::AppContext;
use crate::domain::{
    AppError, Answers, BootstrapConfig, PackageManager, RawConfig, Stage, StageOutcome,
    TargetDirectory, WorkingContext,
};
use crate::ports::{CommandRunner, Prompter, Reporter, TemplateStore};

/// Result of a completed run.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// Debug mode: the environment was inspected and nothing was touched.
    Inspected(DebugReport),
    Ready(BootstrapReport),
}

/// Everything the pipeline produced on success.
#[derive(Debug)]
pub struct BootstrapReport {
    pub config: BootstrapConfig,
    pub target: TargetDirectory,
    pub context: WorkingContext,
    pub manager: PackageManager,
    pub copy: CopyReport,
    pub commit: Option<CommitReport>,
    /// The dev server was started and is left running.
    pub serving: bool,
}

/// Run the whole pipeline for one set of command-line flags.
///
/// Prompts are asked at most once, before any side effect. A stage failure
/// is reported through the reporter and returned; no later stage runs.
pub async fn execute<R, P, T, E>(
    ctx: &AppContext<R, P, T, E>,
    raw: RawConfig,
) -> Result<BootstrapOutcome, AppError>
where
    R: CommandRunner,
    P: Prompter,
    T: TemplateStore,
    E: Reporter,
{
    let questions = raw.pending_questions();
    let answers =
        if questions.is_empty() { Answers::default() } else { ctx.prompter().ask(&questions)? };
    let config = raw.resolve(&answers);
    info!(
        project = %config.project,
        template = %config.template_key().dir_name(),
        "configuration resolved"
    );

    let runner = ctx.runner();
    let reporter = ctx.reporter();
    let invocation_dir = ctx.invocation_dir();

    if config.debug {
        let target = directory::resolve(runner, invocation_dir, &config.project, true).await?;
        let report = debug::inspect(runner, invocation_dir, &config, &target).await;
        return Ok(BootstrapOutcome::Inspected(report));
    }

    reporter.banner(&config, &config.project.directory_name().resolve_from(invocation_dir));

    reporter.stage_started(Stage::Directory);
    let target = finish(
        reporter,
        Stage::Directory,
        directory::resolve(runner, invocation_dir, &config.project, false).await,
    )?;
    reporter.stage_succeeded(Stage::Directory, Some(&target.to_string()));

    reporter.stage_started(Stage::Template);
    let destination = target.resolve_from(invocation_dir);
    let copy = finish(
        reporter,
        Stage::Template,
        materialize::materialize(
            ctx.templates(),
            &config,
            &destination,
            &ctx.settings().editor_config_dir,
        )
        .await,
    )?;
    reporter.stage_succeeded(Stage::Template, Some(&copy.summary()));

    let context = WorkingContext::enter(invocation_dir, &target);

    reporter.stage_started(Stage::Install);
    let manager = packages::detect(runner, ctx.prompter(), context.root()).await;
    finish(reporter, Stage::Install, packages::install(runner, manager, &context).await)?;
    reporter.stage_succeeded(Stage::Install, Some(manager.name()));

    let commit = if config.auto_commit {
        reporter.stage_started(Stage::Commit);
        let report = finish(
            reporter,
            Stage::Commit,
            commit::commit(runner, &context, &ctx.settings().commit_message).await,
        )?;
        reporter.stage_succeeded(Stage::Commit, Some(report.summary()));
        Some(report)
    } else {
        None
    };

    let serving = config.auto_open && hand_off(ctx, manager, &context).await;

    Ok(BootstrapOutcome::Ready(BootstrapReport {
        config,
        target,
        context,
        manager,
        copy,
        commit,
        serving,
    }))
}

/// Open the editor and start the dev server. Failures here only warn.
async fn hand_off<R, P, T, E>(
    ctx: &AppContext<R, P, T, E>,
    manager: PackageManager,
    context: &WorkingContext,
) -> bool
where
    R: CommandRunner,
    P: Prompter,
    T: TemplateStore,
    E: Reporter,
{
    let reporter = ctx.reporter();

    reporter.stage_started(Stage::Editor);
    match dev_server::open_editor(ctx.runner(), context, &ctx.settings().editor_command).await {
        Ok(()) => reporter.stage_succeeded(Stage::Editor, None),
        Err(err) => {
            warn!(error = %err, "editor launch failed");
            reporter.warn(&format!("Could not open the editor: {err}"));
        }
    }

    reporter.stage_started(Stage::DevServer);
    match dev_server::start(ctx.runner(), manager, context) {
        Ok(()) => {
            reporter.stage_succeeded(Stage::DevServer, Some(manager.dev_hint()));
            true
        }
        Err(err) => {
            warn!(error = %err, "dev server failed to start");
            reporter.warn(&format!("Could not start the dev server: {err}"));
            false
        }
    }
}

/// Report a stage failure before handing it to the caller.
fn finish<T>(
    reporter: &impl Reporter,
    stage: Stage,
    outcome: StageOutcome<T>,
) -> Result<T, AppError> {
    outcome.map_err(|err| {
        let err = AppError::from(err);
        reporter.stage_failed(stage, &err);
        err
    })
}
