use crate::domain::{AppError, Answers, Question};

/// Interactive prompt collaborator.
pub trait Prompter: Send + Sync {
    /// Ask every question of the batch and return the answers.
    fn ask(&self, questions: &[Question]) -> Result<Answers, AppError>;

    /// Yes/no question outside the configuration batch.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError>;
}
