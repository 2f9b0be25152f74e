pub mod config;
pub mod error;
pub mod package_manager;
pub mod process;
pub mod settings;
pub mod specifier;
pub mod stage;
pub mod template;
pub mod working_context;

pub use config::{Answers, BootstrapConfig, Question, RawConfig};
pub use error::{AppError, CommitStep, CopyFailure, CopyTarget, StageError, StageOutcome};
pub use package_manager::PackageManager;
pub use process::{ProcessId, find_port_owner};
pub use settings::{SETTINGS_FILE, Settings};
pub use specifier::{CURRENT_DIR_MARKER, ProjectSpecifier, REMOTE_SUFFIX, TargetDirectory};
pub use stage::Stage;
pub use template::{TemplateKey, TemplateKind};
pub use working_context::WorkingContext;
