mod command_runner;
mod prompter;
mod reporter;
mod template_store;

pub use command_runner::{CommandOutput, CommandRunner, Invocation};
pub use prompter::Prompter;
pub use reporter::Reporter;
pub use template_store::{TemplateFile, TemplateStore};
