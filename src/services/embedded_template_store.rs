use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, TemplateKey};
use crate::ports::{TemplateFile, TemplateStore};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");
static EDITOR_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/editor");

/// Template store backed by the trees embedded in the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template_files(&self, key: TemplateKey) -> Result<Vec<TemplateFile>, AppError> {
        let name = key.dir_name();
        let dir = TEMPLATES_DIR
            .get_dir(&name)
            .ok_or_else(|| AppError::config_error(format!("Template '{}' is not bundled", name)))?;

        let mut files = Vec::new();
        collect_files(dir, dir.path(), &mut files);
        Ok(files)
    }

    fn editor_files(&self) -> Result<Vec<TemplateFile>, AppError> {
        let mut files = Vec::new();
        collect_files(&EDITOR_DIR, EDITOR_DIR.path(), &mut files);
        Ok(files)
    }
}

fn collect_files(dir: &Dir<'_>, root: &Path, files: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().strip_prefix(root).unwrap_or(file.path());
                files.push(TemplateFile {
                    path: path.to_path_buf(),
                    contents: file.contents().to_vec(),
                });
            }
            DirEntry::Dir(subdir) => collect_files(subdir, root, files),
        }
    }
}
