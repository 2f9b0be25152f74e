//! API Facade for the application.
//!
//! Glues context creation to the bootstrap pipeline so the CLI never touches
//! adapters directly.

use std::path::Path;

use crate::app::{
    AppContext,
    commands::{bootstrap, dev_server},
    config::load_settings,
};
use crate::domain::{ProcessId, RawConfig};
use crate::services::{
    EmbeddedTemplateStore, ProcessCommandRunner, TerminalPrompter, TerminalReporter,
};

pub use crate::app::commands::bootstrap::{BootstrapOutcome, BootstrapReport};
pub use crate::app::commands::commit::CommitReport;
pub use crate::app::commands::debug::DebugReport;
pub use crate::app::commands::materialize::CopyReport;
pub use crate::domain::AppError;

/// Context wired to the real process runner, terminal and embedded templates.
pub type TerminalContext =
    AppContext<ProcessCommandRunner, TerminalPrompter, EmbeddedTemplateStore, TerminalReporter>;

/// Create a terminal context for an invocation directory, reading its settings file.
pub fn context_at(
    invocation_dir: &Path,
    prompter: TerminalPrompter,
) -> Result<TerminalContext, AppError> {
    let settings = load_settings(invocation_dir)?;
    Ok(AppContext::new(
        invocation_dir.to_path_buf(),
        settings,
        ProcessCommandRunner::new(),
        prompter,
        EmbeddedTemplateStore::new(),
        TerminalReporter::new(),
    ))
}

/// Run the bootstrap pipeline.
pub async fn bootstrap(
    ctx: &TerminalContext,
    raw: RawConfig,
) -> Result<BootstrapOutcome, AppError> {
    bootstrap::execute(ctx, raw).await
}

/// Terminate whatever owns the configured dev-server port.
pub async fn stop_dev_server(ctx: &TerminalContext) -> Result<Option<ProcessId>, AppError> {
    dev_server::stop(ctx.runner(), ctx.invocation_dir(), ctx.settings().dev_server_port).await
}
