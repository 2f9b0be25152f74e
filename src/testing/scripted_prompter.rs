use std::sync::Mutex;

use crate::domain::{AppError, Answers, Question};
use crate::ports::Prompter;

/// Prompter returning canned answers and recording what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Answers,
    confirm_answer: bool,
    batches: Mutex<Vec<Vec<Question>>>,
    confirmations: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = answers;
        self
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn batches(&self) -> Vec<Vec<Question>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, questions: &[Question]) -> Result<Answers, AppError> {
        self.batches.lock().unwrap().push(questions.to_vec());
        Ok(self.answers.clone())
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool, AppError> {
        self.confirmations.lock().unwrap().push(message.to_string());
        Ok(self.confirm_answer)
    }
}
