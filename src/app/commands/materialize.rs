//! Template materialization: copies the template variant and the editor
//! configuration into the target directory.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::domain::{
    AppError, BootstrapConfig, CopyFailure, CopyTarget, StageError, StageOutcome,
};
use crate::ports::{TemplateFile, TemplateStore};

/// Files written and files left alone because they already existed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl CopyReport {
    fn absorb(&mut self, other: CopyReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }

    pub fn summary(&self) -> String {
        if self.skipped.is_empty() {
            format!("{} files", self.written.len())
        } else {
            format!("{} files, {} existing kept", self.written.len(), self.skipped.len())
        }
    }
}

/// Copy the configured template into `destination` and the editor
/// configuration into `destination/<editor_dir>`.
///
/// Both copies run concurrently and both results are inspected; the stage
/// fails if either failed, listing every failed copy. Nothing already written
/// is rolled back.
pub async fn materialize(
    templates: &impl TemplateStore,
    config: &BootstrapConfig,
    destination: &Path,
    editor_dir: &str,
) -> StageOutcome<CopyReport> {
    let editor_destination = destination.join(editor_dir);
    let (template_result, editor_result) = tokio::join!(
        copy_template(templates, config, destination),
        copy_editor_config(templates, &editor_destination),
    );

    let mut report = CopyReport::default();
    let mut failures = Vec::new();
    for (target, result) in
        [(CopyTarget::Template, template_result), (CopyTarget::EditorConfig, editor_result)]
    {
        match result {
            Ok(copied) => report.absorb(copied),
            Err(err) => {
                warn!(copy = target.label(), error = %err, "copy failed");
                failures.push(CopyFailure { target, details: err.to_string() });
            }
        }
    }

    if failures.is_empty() { Ok(report) } else { Err(StageError::TemplateCopy { failures }) }
}

async fn copy_template(
    templates: &impl TemplateStore,
    config: &BootstrapConfig,
    destination: &Path,
) -> Result<CopyReport, AppError> {
    let files = templates.template_files(config.template_key())?;
    copy_tree(&files, destination).await
}

async fn copy_editor_config(
    templates: &impl TemplateStore,
    destination: &Path,
) -> Result<CopyReport, AppError> {
    let files = templates.editor_files()?;
    copy_tree(&files, destination).await
}

/// Write every file under `destination`, skipping files that already exist.
async fn copy_tree(files: &[TemplateFile], destination: &Path) -> Result<CopyReport, AppError> {
    let write_error =
        |path: &Path, source: io::Error| AppError::Write { path: path.to_path_buf(), source };

    fs::create_dir_all(destination).await.map_err(|e| write_error(destination, e))?;

    let mut report = CopyReport::default();
    for file in files {
        let path = destination.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| write_error(parent, e))?;
        }

        // create_new makes the existence check and the creation one step.
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(mut handle) => {
                handle.write_all(&file.contents).await.map_err(|e| write_error(&path, e))?;
                handle.flush().await.map_err(|e| write_error(&path, e))?;
                report.written.push(file.path.clone());
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "keeping existing file");
                report.skipped.push(file.path.clone());
            }
            Err(err) => return Err(write_error(&path, err)),
        }
    }

    Ok(report)
}
