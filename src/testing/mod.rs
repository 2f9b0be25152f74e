mod fake_runner;
mod memory_template_store;
mod recording_reporter;
mod scripted_prompter;

use std::path::Path;

use crate::app::AppContext;
use crate::domain::Settings;

pub use fake_runner::FakeCommandRunner;
pub use memory_template_store::{MemoryTemplateStore, file};
pub use recording_reporter::RecordingReporter;
pub use scripted_prompter::ScriptedPrompter;

pub type TestContext =
    AppContext<FakeCommandRunner, ScriptedPrompter, MemoryTemplateStore, RecordingReporter>;

/// Context rooted at `dir` with default fakes around the given runner.
pub fn test_context(dir: &Path, runner: FakeCommandRunner) -> TestContext {
    AppContext::new(
        dir.to_path_buf(),
        Settings::default(),
        runner,
        ScriptedPrompter::new(),
        MemoryTemplateStore::new(),
        RecordingReporter::new(),
    )
}
