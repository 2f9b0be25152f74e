use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::{AppError, TemplateKey};
use crate::ports::{TemplateFile, TemplateStore};

/// In-memory template store. Every variant shares the same file set unless
/// overridden; unknown variants fail like a missing bundle would.
#[derive(Debug, Clone)]
pub struct MemoryTemplateStore {
    default_files: Option<Vec<TemplateFile>>,
    variants: HashMap<String, Vec<TemplateFile>>,
    editor: Option<Vec<TemplateFile>>,
}

pub fn file(path: &str, contents: &str) -> TemplateFile {
    TemplateFile { path: PathBuf::from(path), contents: contents.as_bytes().to_vec() }
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self {
            default_files: Some(vec![
                file("package.json", "{\"name\":\"app\"}"),
                file("index.html", "<div id=\"app\"></div>"),
                file("src/main.js", "console.log('hi');"),
            ]),
            variants: HashMap::new(),
            editor: Some(vec![file("settings.json", "{}")]),
        }
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the given variant exists.
    pub fn only_variant(mut self, key: TemplateKey, files: Vec<TemplateFile>) -> Self {
        self.default_files = None;
        self.variants.insert(key.dir_name(), files);
        self
    }

    pub fn without_editor(mut self) -> Self {
        self.editor = None;
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn template_files(&self, key: TemplateKey) -> Result<Vec<TemplateFile>, AppError> {
        self.variants
            .get(&key.dir_name())
            .or(self.default_files.as_ref())
            .cloned()
            .ok_or_else(|| {
                AppError::config_error(format!("Template '{}' is not bundled", key.dir_name()))
            })
    }

    fn editor_files(&self) -> Result<Vec<TemplateFile>, AppError> {
        self.editor
            .clone()
            .ok_or_else(|| AppError::config_error("Editor configuration is not bundled"))
    }
}
