/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Directory,
    Template,
    Install,
    Commit,
    Editor,
    DevServer,
}

impl Stage {
    /// Progress message shown while the stage runs.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Directory => "Preparing the target directory",
            Stage::Template => "Copying the template",
            Stage::Install => "Installing dependencies",
            Stage::Commit => "Creating the first commit",
            Stage::Editor => "Opening the project in the editor",
            Stage::DevServer => "Starting the development server",
        }
    }
}
