#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod history_service;
pub mod presenter;
pub mod question_source;
pub mod settings;

pub use quiz_core::Clock;

pub use controller::{ControllerState, QuizCommands, QuizController};
pub use error::QuestionSourceError;
pub use history_service::HistoryService;
pub use presenter::{Presenter, QuestionView, feedback_message, result_message};
pub use question_source::{QuestionLoader, QuestionSource};
pub use settings::QuizSettings;
