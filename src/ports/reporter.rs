use std::path::Path;

use crate::domain::{AppError, BootstrapConfig, Stage};

/// Rendering collaborator. Output only, nothing flows back to the pipeline.
pub trait Reporter: Send + Sync {
    /// Header shown before any side effect.
    fn banner(&self, config: &BootstrapConfig, target: &Path);

    fn stage_started(&self, stage: Stage);

    fn stage_succeeded(&self, stage: Stage, detail: Option<&str>);

    fn stage_failed(&self, stage: Stage, error: &AppError);

    fn warn(&self, message: &str);
}
