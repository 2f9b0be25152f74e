use std::fmt;

/// Package manager used to install dependencies and run the dev server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Npm,
}

impl PackageManager {
    /// Faster manager, used whenever it is available.
    pub const PREFERRED: PackageManager = PackageManager::Pnpm;
    /// Manager shipped with Node.js, always assumed present.
    pub const BASELINE: PackageManager = PackageManager::Npm;

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
        }
    }

    /// Executable to spawn. Both managers are `.cmd` shims on Windows.
    pub fn program(&self) -> String {
        if cfg!(windows) { format!("{}.cmd", self.name()) } else { self.name().to_string() }
    }

    pub fn version_args(&self) -> Vec<String> {
        vec!["--version".to_string()]
    }

    pub fn install_args(&self) -> Vec<String> {
        vec!["install".to_string()]
    }

    /// Arguments that start the dev server and open it in the browser.
    pub fn dev_args(&self) -> Vec<String> {
        let args: &[&str] = match self {
            PackageManager::Pnpm => &["dev", "--open"],
            PackageManager::Npm => &["run", "dev", "--", "--open"],
        };
        args.iter().map(|arg| arg.to_string()).collect()
    }

    /// Arguments for the baseline manager to install `self` globally.
    pub fn global_install_args(&self) -> Vec<String> {
        vec!["install".to_string(), "-g".to_string(), self.name().to_string()]
    }

    /// Command line shown to the user as the next step.
    pub fn dev_hint(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Npm => "npm run dev",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
