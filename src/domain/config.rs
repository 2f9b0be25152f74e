//! Run configuration: command-line flags merged with prompt answers.

use super::{ProjectSpecifier, TemplateKey, TemplateKind};

/// Flags as given on the command line, before any prompting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub project: Option<String>,
    pub yes: bool,
    pub react: bool,
    pub typescript: bool,
    pub eslint: bool,
    pub commit: bool,
    pub access: bool,
    pub debug: bool,
}

impl RawConfig {
    /// `--yes`, or any explicit flag, means the user already decided.
    pub fn skip_prompts(&self) -> bool {
        self.yes
            || self.react
            || self.typescript
            || self.eslint
            || self.commit
            || self.access
            || self.debug
    }

    /// Questions still open for this run, in the order they are asked.
    pub fn pending_questions(&self) -> Vec<Question> {
        if self.skip_prompts() {
            return Vec::new();
        }

        let mut questions = Vec::new();
        if !self.react {
            questions.push(Question::Template);
        }
        if !self.typescript {
            questions.push(Question::TypeScript);
        }
        if !self.eslint {
            questions.push(Question::Lint);
        }
        if !self.commit {
            questions.push(Question::Commit);
        }
        if !self.access {
            questions.push(Question::Open);
        }
        questions
    }

    /// Merge the flags with the prompt answers into the final configuration.
    ///
    /// A flag set on the command line always wins over an answer.
    pub fn resolve(self, answers: &Answers) -> BootstrapConfig {
        let template = if self.react {
            TemplateKind::React
        } else {
            answers.template.unwrap_or_default()
        };

        BootstrapConfig {
            project: ProjectSpecifier::parse(self.project.as_deref().unwrap_or_default()),
            template,
            typed: self.typescript || answers.typescript.unwrap_or(false),
            lint: self.eslint || answers.lint.unwrap_or(false),
            auto_commit: self.commit || answers.commit.unwrap_or(false),
            auto_open: self.access || answers.open.unwrap_or(false),
            debug: self.debug,
        }
    }
}

/// A question the prompt collaborator may be asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Question {
    Template,
    TypeScript,
    Lint,
    Commit,
    Open,
}

impl Question {
    pub fn message(&self) -> &'static str {
        match self {
            Question::Template => "Which template do you want to use?",
            Question::TypeScript => "Use TypeScript?",
            Question::Lint => "Add ESLint (Airbnb profile)?",
            Question::Commit => "Commit the installation automatically?",
            Question::Open => "Open the project in VS Code and the browser?",
        }
    }
}

/// Answers collected by the prompt collaborator. `None` means not asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub template: Option<TemplateKind>,
    pub typescript: Option<bool>,
    pub lint: Option<bool>,
    pub commit: Option<bool>,
    pub open: Option<bool>,
}

/// Fully resolved configuration of one bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub project: ProjectSpecifier,
    pub template: TemplateKind,
    pub typed: bool,
    pub lint: bool,
    pub auto_commit: bool,
    pub auto_open: bool,
    pub debug: bool,
}

impl BootstrapConfig {
    pub fn template_key(&self) -> TemplateKey {
        TemplateKey::new(self.template, self.typed, self.lint)
    }
}
