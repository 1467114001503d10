use quiz_core::model::{HistoryEntry, SessionResult};
use quiz_core::session::AnswerFeedback;
use services::{Presenter, QuestionView, feedback_message};

use super::history_vm::{HistoryLineVm, map_history_lines};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenStatus {
    #[default]
    Loading,
    Question,
    Finished,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub message: String,
}

impl From<&AnswerFeedback> for FeedbackVm {
    fn from(feedback: &AnswerFeedback) -> Self {
        Self {
            is_correct: feedback.is_correct,
            message: feedback_message(feedback),
        }
    }
}

/// Everything the quiz page draws, kept up to date by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizScreen {
    pub status: ScreenStatus,
    pub question: Option<QuestionView>,
    pub choices_enabled: bool,
    pub feedback: Option<FeedbackVm>,
    pub next_visible: bool,
    pub restart_visible: bool,
    pub result: Option<SessionResult>,
    pub history: Vec<HistoryLineVm>,
    pub error: Option<String>,
}

impl QuizScreen {
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }
}

impl Presenter for QuizScreen {
    fn render_loading(&mut self) {
        self.status = ScreenStatus::Loading;
        self.error = None;
    }

    fn render_question(&mut self, question: &QuestionView) {
        self.status = ScreenStatus::Question;
        self.result = None;
        self.question = Some(question.clone());
    }

    fn set_choices_enabled(&mut self, enabled: bool) {
        self.choices_enabled = enabled;
    }

    fn show_feedback(&mut self, feedback: &AnswerFeedback) {
        self.feedback = Some(FeedbackVm::from(feedback));
    }

    fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    fn set_next_visible(&mut self, visible: bool) {
        self.next_visible = visible;
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
    }

    fn render_finished(&mut self, result: SessionResult) {
        self.status = ScreenStatus::Finished;
        self.question = None;
        self.result = Some(result);
    }

    fn render_history(&mut self, entries: &[HistoryEntry]) {
        self.history = map_history_lines(entries);
    }

    fn report_load_failure(&mut self, message: &str) {
        self.status = ScreenStatus::Failed;
        self.error = Some(message.to_owned());
    }
}
