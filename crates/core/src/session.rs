use std::fmt;

use rand::Rng;

use crate::model::{Question, SessionResult};
use crate::sampler::sample;

//
// ─── PHASES AND OUTCOMES ──────────────────────────────────────────────────────
//

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// A question is on screen; `answered` is true once a choice was accepted.
    InProgress { index: usize, answered: bool },
    Finished,
}

/// Feedback for an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub chosen: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Result of asking the session to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No answer was submitted for the current question, or the session is over.
    Ignored,
    /// Moved to the next question.
    Next,
    /// The last question was passed; carries the final score.
    Finished(SessionResult),
}

/// Snapshot used for "Question i of N" style labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the current question, or `total` once finished.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One playthrough over a sampled set of questions.
///
/// The index and the score only grow. A submitted answer is held as pending
/// feedback and is committed to the score when the session advances, so
/// `score <= current_index <= total` holds between any two calls.
#[derive(Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    pending: Option<AnswerFeedback>,
}

impl QuizSession {
    /// Wrap an already-selected set of questions.
    ///
    /// An empty set produces a session that is finished from the start.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            pending: None,
        }
    }

    /// Sample up to `requested` questions from `pool` and start at the first one.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(pool: &[Question], requested: usize, rng: &mut R) -> Self {
        Self::new(sample(pool, requested, rng))
    }

    /// Replace this session with a fresh, independent sample.
    pub fn restart<R: Rng + ?Sized>(&mut self, pool: &[Question], requested: usize, rng: &mut R) {
        *self = Self::start(pool, requested, rng);
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.is_finished() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress {
                index: self.current,
                answered: self.pending.is_some(),
            }
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Feedback for the answer given to the current question, if any.
    #[must_use]
    pub fn pending_feedback(&self) -> Option<&AnswerFeedback> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total();
        SessionProgress {
            position: (self.current + 1).min(total),
            total,
            answered: self.current + usize::from(self.pending.is_some()),
            score: self.score,
            is_complete: self.is_finished(),
        }
    }

    /// Final score, available once the session is finished.
    #[must_use]
    pub fn result(&self) -> Option<SessionResult> {
        self.is_finished().then(|| self.build_result())
    }

    /// Record an answer for the current question.
    ///
    /// Returns `None` without touching any state when the session is finished,
    /// when the current question was already answered, or when `choice` does not
    /// name one of its choices.
    pub fn submit_answer(&mut self, choice: usize) -> Option<AnswerFeedback> {
        if self.pending.is_some() {
            return None;
        }
        let question = self.current_question()?;
        if !question.has_choice(choice) {
            return None;
        }

        let feedback = AnswerFeedback {
            chosen: choice,
            correct_index: question.correct_index(),
            is_correct: question.is_correct(choice),
            explanation: question.explanation().to_owned(),
        };
        self.pending = Some(feedback.clone());
        Some(feedback)
    }

    /// Move past the answered question.
    ///
    /// Ignored until the current question has an answer.
    pub fn advance(&mut self) -> Advance {
        let Some(answer) = self.pending.take() else {
            return Advance::Ignored;
        };

        if answer.is_correct {
            self.score += 1;
        }
        self.current += 1;

        if self.is_finished() {
            Advance::Finished(self.build_result())
        } else {
            Advance::Next
        }
    }

    fn build_result(&self) -> SessionResult {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        SessionResult::new(clamp(self.score), clamp(self.total()))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
