use std::path::PathBuf;

use crate::domain::{AppError, TemplateKey};

/// A file of a template tree, with its path relative to the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Source of template and editor-configuration trees.
pub trait TemplateStore: Send + Sync {
    /// All files of the template variant identified by `key`.
    fn template_files(&self, key: TemplateKey) -> Result<Vec<TemplateFile>, AppError>;

    /// All files of the editor-configuration tree.
    fn editor_files(&self) -> Result<Vec<TemplateFile>, AppError>;
}
