mod history;
mod quiz;

#[cfg(test)]
mod view_smoke;

pub use history::HistoryList;
pub use quiz::{QuestionCard, QuizView};
