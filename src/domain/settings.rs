use serde::Deserialize;

/// File name of the optional settings file in the invocation directory.
pub const SETTINGS_FILE: &str = ".ovite.toml";

/// Tunables of a bootstrap run. Every key of the settings file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Port the Vite dev server listens on.
    pub dev_server_port: u16,
    pub commit_message: String,
    /// Editor executable, launched as `<editor_command> .`.
    pub editor_command: String,
    /// Subdirectory of the project receiving the editor configuration.
    pub editor_config_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dev_server_port: 5173,
            commit_message: "Install Vite".to_string(),
            editor_command: "code".to_string(),
            editor_config_dir: ".vscode".to_string(),
        }
    }
}
