use dialoguer::{Confirm, Select};

use crate::domain::{AppError, Answers, Question, RawConfig, TemplateKind};
use crate::ports::Prompter;

/// Prompter backed by dialoguer.
///
/// The configuration batch and standalone yes/no questions are gated
/// separately: explicit flags settle the configuration but leave questions
/// such as the pnpm install open. A gated-off prompt answers with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPrompter {
    configure: bool,
    confirmations: bool,
}

impl TerminalPrompter {
    pub fn new(configure: bool, confirmations: bool) -> Self {
        Self { configure, confirmations }
    }

    /// Prompter that never blocks on input.
    pub fn non_interactive() -> Self {
        Self::new(false, false)
    }

    /// Gates for a run with the given flags. Nothing is asked without a
    /// terminal, and `--yes` also accepts the default for yes/no questions.
    pub fn for_run(raw: &RawConfig, tty: bool) -> Self {
        Self::new(tty && !raw.skip_prompts(), tty && !raw.yes)
    }

    fn confirm_with(&self, enabled: bool, message: &str, default: bool) -> Result<bool, AppError> {
        if !enabled {
            return Ok(default);
        }
        Confirm::new().with_prompt(message).default(default).interact().map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::Prompt(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn ask(&self, questions: &[Question]) -> Result<Answers, AppError> {
        let mut answers = Answers::default();

        for question in questions {
            match question {
                Question::Template => {
                    let index = if self.configure {
                        let items: Vec<&str> =
                            TemplateKind::ALL.iter().map(|kind| kind.display_name()).collect();
                        Select::new()
                            .with_prompt(question.message())
                            .items(&items)
                            .default(0)
                            .interact()
                            .map_err(prompt_error)?
                    } else {
                        0
                    };
                    answers.template = Some(TemplateKind::ALL[index]);
                }
                Question::TypeScript => answers.typescript = Some(self.setting(question)?),
                Question::Lint => answers.lint = Some(self.setting(question)?),
                Question::Commit => answers.commit = Some(self.setting(question)?),
                Question::Open => answers.open = Some(self.setting(question)?),
            }
        }

        Ok(answers)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        self.confirm_with(self.confirmations, message, default)
    }
}

impl TerminalPrompter {
    fn setting(&self, question: &Question) -> Result<bool, AppError> {
        self.confirm_with(self.configure, question.message(), false)
    }
}
