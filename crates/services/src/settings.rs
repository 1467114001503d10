use std::env;

use crate::question_source::QuestionSource;

pub const DEFAULT_QUESTIONS: &str = "questions.json";
pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

/// Runtime configuration for a quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    pub questions: QuestionSource,
    /// Questions per session; sessions shrink to the pool size when it is smaller.
    pub question_count: usize,
    pub db_url: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions: QuestionSource::parse(DEFAULT_QUESTIONS),
            question_count: DEFAULT_QUESTION_COUNT,
            db_url: DEFAULT_DB_URL.into(),
        }
    }
}

impl QuizSettings {
    /// Read `QUIZ_QUESTIONS`, `QUIZ_QUESTION_COUNT` and `QUIZ_DB_URL`,
    /// falling back to defaults for missing or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let questions = lookup("QUIZ_QUESTIONS")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.questions, |v| QuestionSource::parse(&v));
        let question_count = lookup("QUIZ_QUESTION_COUNT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(defaults.question_count);
        let db_url = lookup("QUIZ_DB_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.db_url);

        Self {
            questions,
            question_count,
            db_url,
        }
    }
}
