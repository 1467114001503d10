mod history_vm;
mod quiz_screen;

pub use history_vm::{HistoryLineVm, map_history_lines};
pub use quiz_screen::{FeedbackVm, QuizScreen, ScreenStatus};
