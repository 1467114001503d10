mod history;
mod question;

pub use history::{HistoryEntry, SessionResult};
pub use question::{Choice, Question, QuestionError};
