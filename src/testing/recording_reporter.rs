use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, BootstrapConfig, Stage};
use crate::ports::Reporter;

/// Reporter recording each event as a short line.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn banner(&self, config: &BootstrapConfig, _target: &Path) {
        self.record(format!("banner {}", config.template_key().dir_name()));
    }

    fn stage_started(&self, stage: Stage) {
        self.record(format!("start {:?}", stage));
    }

    fn stage_succeeded(&self, stage: Stage, _detail: Option<&str>) {
        self.record(format!("ok {:?}", stage));
    }

    fn stage_failed(&self, stage: Stage, error: &AppError) {
        self.record(format!("failed {:?} {}", stage, error.exit_code()));
    }

    fn warn(&self, message: &str) {
        self.record(format!("warn {}", message));
    }
}
