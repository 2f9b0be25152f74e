//! Optional `.ovite.toml` settings file.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, SETTINGS_FILE, Settings};

/// Load `.ovite.toml` from `dir`, falling back to defaults when it is absent.
pub fn load_settings(dir: &Path) -> Result<Settings, AppError> {
    let path = dir.join(SETTINGS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };

    let settings: Settings = toml::from_str(&content)?;
    if settings.editor_command.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "{}: editor_command must not be empty",
            SETTINGS_FILE
        )));
    }
    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}
