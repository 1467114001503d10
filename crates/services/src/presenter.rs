//! Boundary between the quiz controller and whatever renders it.

use quiz_core::model::{HistoryEntry, Question, SessionResult};
use quiz_core::session::{AnswerFeedback, SessionProgress};

/// Everything needed to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position within the session.
    pub position: usize,
    /// Session size, i.e. `min(requested, pool size)`.
    pub total: usize,
    pub text: String,
    pub choices: Vec<String>,
}

impl QuestionView {
    #[must_use]
    pub fn new(question: &Question, progress: SessionProgress) -> Self {
        Self {
            position: progress.position,
            total: progress.total,
            text: question.text().to_owned(),
            choices: question.choices().iter().map(|c| c.text.clone()).collect(),
        }
    }

    /// Label such as `Question 2 of 10`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }
}

/// Rendering calls issued by the controller.
///
/// Implementations only draw; they never mutate quiz state themselves.
pub trait Presenter: Send {
    fn render_loading(&mut self);
    fn render_question(&mut self, question: &QuestionView);
    fn set_choices_enabled(&mut self, enabled: bool);
    fn show_feedback(&mut self, feedback: &AnswerFeedback);
    fn clear_feedback(&mut self);
    fn set_next_visible(&mut self, visible: bool);
    fn set_restart_visible(&mut self, visible: bool);
    fn render_finished(&mut self, result: SessionResult);
    fn render_history(&mut self, entries: &[HistoryEntry]);
    fn report_load_failure(&mut self, message: &str);
}

/// Feedback line shown after an answer, e.g. `Correct! Tokyo is the capital.`
#[must_use]
pub fn feedback_message(feedback: &AnswerFeedback) -> String {
    let verdict = if feedback.is_correct {
        "Correct!"
    } else {
        "Incorrect."
    };
    if feedback.explanation.is_empty() {
        verdict.to_owned()
    } else {
        format!("{verdict} {}", feedback.explanation)
    }
}

/// Closing line for a finished session.
#[must_use]
pub fn result_message(result: SessionResult) -> String {
    format!(
        "Quiz complete! Your score: {} / {}",
        result.score, result.total
    )
}
