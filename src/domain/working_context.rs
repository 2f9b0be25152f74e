use std::path::{Path, PathBuf};

use super::TargetDirectory;

/// Directory in which every stage after materialization runs its commands.
///
/// Only the orchestrator creates one, once the template has been copied, so
/// holding a `WorkingContext` proves the project directory is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingContext {
    root: PathBuf,
}

impl WorkingContext {
    pub(crate) fn enter(invocation_dir: &Path, target: &TargetDirectory) -> Self {
        Self { root: target.resolve_from(invocation_dir) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
