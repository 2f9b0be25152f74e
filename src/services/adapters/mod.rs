pub mod process_command;
pub mod terminal_prompter;
pub mod terminal_reporter;

pub use process_command::ProcessCommandRunner;
pub use terminal_prompter::TerminalPrompter;
pub use terminal_reporter::TerminalReporter;
