use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use quiz_core::model::{Choice, Question};

use crate::error::QuestionSourceError;

/// Where the question bank is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// Interpret `raw` as an HTTP(S) URL or, failing that, a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetches and validates question banks.
#[derive(Clone, Default)]
pub struct QuestionLoader {
    client: Client,
}

impl QuestionLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the question bank once and decode it.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the source cannot be read, the HTTP
    /// response is not successful, the body is not valid JSON, or a record fails
    /// validation.
    pub async fn load(&self, source: &QuestionSource) -> Result<Vec<Question>, QuestionSourceError> {
        let body = match source {
            QuestionSource::File(path) => tokio::fs::read_to_string(path).await?,
            QuestionSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(QuestionSourceError::HttpStatus(response.status()));
                }
                response.text().await?
            }
        };

        let pool = parse_question_bank(&body)?;
        info!(source = %source, questions = pool.len(), "question bank loaded");
        Ok(pool)
    }
}

/// Decode a JSON question bank.
///
/// # Errors
///
/// Returns `QuestionSourceError::Decode` for malformed JSON and
/// `QuestionSourceError::InvalidQuestion` for the first record that fails
/// validation.
pub fn parse_question_bank(json: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_question()
                .map_err(|source| QuestionSourceError::InvalidQuestion { index, source })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    choices: Vec<ChoiceRecord>,
    correct: usize,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct ChoiceRecord {
    text: String,
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, quiz_core::model::QuestionError> {
        let choices = self
            .choices
            .into_iter()
            .map(|c| Choice::new(c.text))
            .collect();
        Question::new(self.question, choices, self.correct, self.explanation)
    }
}
