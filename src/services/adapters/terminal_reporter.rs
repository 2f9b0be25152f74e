use std::path::Path;

use crate::domain::{AppError, BootstrapConfig, Stage};
use crate::ports::Reporter;

/// Reporter printing progress lines to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TerminalReporter {
    fn banner(&self, config: &BootstrapConfig, target: &Path) {
        println!();
        println!("  O'VITE v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("  directory: {}", target.display());
        println!("  template:  {}", config.template_key().label());
        println!();
    }

    fn stage_started(&self, stage: Stage) {
        println!("⏳ {}…", stage.label());
    }

    fn stage_succeeded(&self, stage: Stage, detail: Option<&str>) {
        match detail {
            Some(detail) => println!("✅ {} ({})", stage.label(), detail),
            None => println!("✅ {}", stage.label()),
        }
    }

    fn stage_failed(&self, stage: Stage, error: &AppError) {
        eprintln!("❌ {}: {}", stage.label(), error);
        if let AppError::Stage(stage_error) = error
            && let Some(diagnostic) = stage_error.diagnostic()
        {
            eprintln!("{}", diagnostic);
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}
