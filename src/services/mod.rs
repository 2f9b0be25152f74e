pub mod adapters;
mod embedded_template_store;

pub use adapters::{ProcessCommandRunner, TerminalPrompter, TerminalReporter};
pub use embedded_template_store::EmbeddedTemplateStore;
