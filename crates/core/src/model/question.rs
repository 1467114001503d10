use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no choices")]
    NoChoices,

    #[error("correct index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── CHOICE ───────────────────────────────────────────────────────────────────
//

/// One selectable answer label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
}

impl Choice {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Questions are immutable once validated: the choice list is non-empty and
/// `correct_index` always names one of its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    choices: Vec<Choice>,
    correct_index: usize,
    explanation: String,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoChoices` if `choices` is empty.
    /// Returns `QuestionError::CorrectIndexOutOfRange` if `correct_index` does not
    /// name one of the choices.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<Choice>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        if choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }
        if correct_index >= choices.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: choices.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            choices,
            correct_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns true if `choice` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Returns true if `choice` names one of this question's choices.
    #[must_use]
    pub fn has_choice(&self, choice: usize) -> bool {
        choice < self.choices.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(labels: &[&str]) -> Vec<Choice> {
        labels.iter().map(|l| Choice::new(*l)).collect()
    }

    #[test]
    fn valid_question_builds() {
        let q = Question::new("2 + 2?", choices(&["3", "4"]), 1, "basic arithmetic").unwrap();
        assert_eq!(q.text(), "2 + 2?");
        assert_eq!(q.choices().len(), 2);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(q.has_choice(1));
        assert!(!q.has_choice(2));
    }

    #[test]
    fn empty_choices_are_rejected() {
        let err = Question::new("?", Vec::new(), 0, "").unwrap_err();
        assert_eq!(err, QuestionError::NoChoices);
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let err = Question::new("?", choices(&["a", "b"]), 2, "").unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }
}
