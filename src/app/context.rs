use std::path::{Path, PathBuf};

use crate::domain::Settings;
use crate::ports::{CommandRunner, Prompter, Reporter, TemplateStore};

/// Application context holding dependencies for a bootstrap run.
pub struct AppContext<R: CommandRunner, P: Prompter, T: TemplateStore, E: Reporter> {
    invocation_dir: PathBuf,
    settings: Settings,
    runner: R,
    prompter: P,
    templates: T,
    reporter: E,
}

impl<R: CommandRunner, P: Prompter, T: TemplateStore, E: Reporter> AppContext<R, P, T, E> {
    /// Create a new application context.
    pub fn new(
        invocation_dir: PathBuf,
        settings: Settings,
        runner: R,
        prompter: P,
        templates: T,
        reporter: E,
    ) -> Self {
        Self { invocation_dir, settings, runner, prompter, templates, reporter }
    }

    /// Directory the tool was invoked from. Project specifiers are relative to it.
    pub fn invocation_dir(&self) -> &Path {
        &self.invocation_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn reporter(&self) -> &E {
        &self.reporter
    }
}
