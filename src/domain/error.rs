use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use super::PackageManager;

/// Library-wide error type for ovite operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of a pipeline stage.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An external command could not be started at all.
    #[error("Failed to run '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// An external command ran but reported failure.
    #[error("'{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// A file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The interactive prompt could not be completed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Settings file could not be parsed.
    #[error("Invalid settings file: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A bootstrap stage failed.
    #[error(transparent)]
    Stage(#[from] StageError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code for this error. Stage failures keep their stable code.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Stage(stage) => stage.exit_code(),
            _ => 1,
        }
    }
}

/// Failure of one bootstrap stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Target directory '{}' already exists", .path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Git repository '{remote}' does not exist or is unreachable")]
    RemoteUnreachable { remote: String },

    #[error("Failed to clone git repository '{remote}': {details}")]
    CloneFailed { remote: String, details: String },

    #[error("Failed to create target directory '{}': {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy the {}", describe_copy_failures(.failures))]
    TemplateCopy { failures: Vec<CopyFailure> },

    /// `payload` holds the verbatim failure report of the install command.
    #[error("Failed to install dependencies with {manager}")]
    DependencyInstall { manager: PackageManager, payload: String },

    #[error("Failed to commit the installation at '{step}': {details}")]
    Commit { step: CommitStep, details: String },
}

impl StageError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            StageError::DirectoryExists { .. } => 110,
            StageError::RemoteUnreachable { .. } => 120,
            StageError::CloneFailed { .. } => 121,
            StageError::DirectoryCreate { .. } => 130,
            StageError::TemplateCopy { .. } => 210,
            StageError::DependencyInstall { .. } => 220,
            StageError::Commit { .. } => 230,
        }
    }

    /// Extra diagnostic detail worth printing below the error line.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            StageError::TemplateCopy { failures } => serde_json::to_string_pretty(failures).ok(),
            StageError::DependencyInstall { payload, .. } => Some(payload.clone()),
            _ => None,
        }
    }
}

/// Result of a single pipeline stage.
pub type StageOutcome<T> = Result<T, StageError>;

/// One of the two concurrent copies performed during materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyTarget {
    Template,
    EditorConfig,
}

impl CopyTarget {
    pub fn label(&self) -> &'static str {
        match self {
            CopyTarget::Template => "template",
            CopyTarget::EditorConfig => "editor configuration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub target: CopyTarget,
    pub details: String,
}

fn describe_copy_failures(failures: &[CopyFailure]) -> String {
    failures.iter().map(|failure| failure.target.label()).collect::<Vec<_>>().join(" and ")
}

/// Sub-step of the commit pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStep {
    Init,
    Add,
    Commit,
    Remote,
    Push,
}

impl fmt::Display for CommitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommitStep::Init => "git init",
            CommitStep::Add => "git add",
            CommitStep::Commit => "git commit",
            CommitStep::Remote => "git remote",
            CommitStep::Push => "git push",
        };
        f.write_str(name)
    }
}
