//! Read-only environment report rendered in debug mode.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use super::directory::remote_reachable;
use crate::domain::{BootstrapConfig, TargetDirectory};
use crate::ports::{CommandRunner, Invocation};

const UNKNOWN: &str = "unknown";

/// Everything worth knowing before a bug report. Collecting it never mutates
/// the filesystem or git state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugReport {
    pub version: String,
    pub node_version: Option<String>,
    /// Even Node.js majors are the LTS lines.
    pub node_supported: bool,
    pub git_email: String,
    /// Only checked for remote specifiers.
    pub remote_reachable: Option<bool>,
    pub target: PathBuf,
    pub target_exists: bool,
    pub config: BootstrapConfig,
    pub os: String,
    pub terminal: String,
    pub shell: String,
}

pub async fn inspect(
    runner: &impl CommandRunner,
    invocation_dir: &Path,
    config: &BootstrapConfig,
    target: &TargetDirectory,
) -> DebugReport {
    let node_version = stdout_of(runner, invocation_dir, "node", &["--version"]).await;
    let node_supported =
        node_version.as_deref().and_then(node_major).is_some_and(|major| major % 2 == 0);
    let git_email = stdout_of(runner, invocation_dir, "git", &["config", "user.email"])
        .await
        .unwrap_or_else(|| UNKNOWN.to_string());

    let remote_reachable = match config.project.remote() {
        Some(remote) => Some(remote_reachable(runner, invocation_dir, remote).await),
        None => None,
    };

    let target_path = target.resolve_from(invocation_dir);
    let target_exists = tokio::fs::try_exists(&target_path).await.unwrap_or(false);

    DebugReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        node_version,
        node_supported,
        git_email,
        remote_reachable,
        target: target_path,
        target_exists,
        config: config.clone(),
        os: format!("{} ({})", env::consts::OS, env::consts::ARCH),
        terminal: env_or_unknown("TERM_PROGRAM", "TERM"),
        shell: env_or_unknown("SHELL", "COMSPEC"),
    }
}

fn env_or_unknown(primary: &str, fallback: &str) -> String {
    env::var(primary).or_else(|_| env::var(fallback)).unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Trimmed stdout of a successful command, `None` otherwise.
async fn stdout_of(
    runner: &impl CommandRunner,
    cwd: &Path,
    program: &str,
    args: &[&str],
) -> Option<String> {
    let invocation = Invocation::new(program, args.iter().copied(), cwd);
    let output = runner.run(&invocation).await.ok().filter(|output| output.success)?;
    let stdout = output.stdout.trim();
    (!stdout.is_empty()).then(|| stdout.to_string())
}

/// Major version of a `v20.11.1` style version string.
fn node_major(version: &str) -> Option<u32> {
    version.trim_start_matches('v').split('.').next()?.parse().ok()
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl fmt::Display for DebugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ovite {} debug report", self.version)?;
        match &self.node_version {
            Some(version) => writeln!(
                f,
                "  node:        {} ({})",
                version,
                if self.node_supported { "LTS" } else { "not an LTS line" }
            )?,
            None => writeln!(f, "  node:        not found")?,
        }
        writeln!(f, "  git email:   {}", self.git_email)?;
        if let Some(reachable) = self.remote_reachable {
            let project = &self.config.project;
            writeln!(f, "  remote:      {} (reachable: {})", project, yes_no(reachable))?;
        }
        let exists = yes_no(self.target_exists);
        writeln!(f, "  target:      {} (exists: {})", self.target.display(), exists)?;
        writeln!(f, "  template:    {}", self.config.template_key().label())?;
        writeln!(f, "  commit:      {}", yes_no(self.config.auto_commit))?;
        writeln!(f, "  open:        {}", yes_no(self.config.auto_open))?;
        writeln!(f, "  os:          {}", self.os)?;
        writeln!(f, "  terminal:    {}", self.terminal)?;
        write!(f, "  shell:       {}", self.shell)
    }
}
