use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, warn};

use quiz_core::model::{Question, SessionResult};
use quiz_core::session::{Advance, QuizSession};

use crate::error::QuestionSourceError;
use crate::history_service::HistoryService;
use crate::presenter::{Presenter, QuestionView};
use crate::question_source::{QuestionLoader, QuestionSource};

/// Commands a presentation layer sends to the quiz.
///
/// Each command runs to completion before the next one is issued. Commands that
/// do not fit the current state are ignored.
#[async_trait]
pub trait QuizCommands {
    async fn on_choice_selected(&mut self, index: usize);
    async fn on_next_requested(&mut self);
    async fn on_restart_requested(&mut self);
}

/// Coarse lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No question pool yet (initial state, or the load failed).
    Loading,
    InProgress,
    Finished,
}

/// Drives one quiz: owns the pool, the active session and the history, and
/// renders every transition through a [`Presenter`].
pub struct QuizController<P: Presenter> {
    presenter: P,
    history: HistoryService,
    loader: QuestionLoader,
    question_count: usize,
    pool: Option<Vec<Question>>,
    session: Option<QuizSession>,
    rng: StdRng,
}

impl<P: Presenter> QuizController<P> {
    #[must_use]
    pub fn new(presenter: P, history: HistoryService, question_count: usize) -> Self {
        Self {
            presenter,
            history,
            loader: QuestionLoader::new(),
            question_count,
            pool: None,
            session: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a deterministic random source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        match &self.session {
            None => ControllerState::Loading,
            Some(session) if session.is_finished() => ControllerState::Finished,
            Some(_) => ControllerState::InProgress,
        }
    }

    /// Fetch the question bank and start the first session.
    ///
    /// On failure the diagnostic is logged and handed to the presenter, the quiz
    /// stays unpopulated, and the error is returned. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the bank cannot be fetched or decoded.
    pub async fn load(&mut self, source: &QuestionSource) -> Result<(), QuestionSourceError> {
        self.presenter.render_loading();
        match self.loader.load(source).await {
            Ok(pool) => {
                self.start(pool).await;
                Ok(())
            }
            Err(err) => {
                error!(source = %source, error = %err, "failed to load questions");
                self.presenter
                    .report_load_failure(&format!("Failed to load questions: {err}"));
                Err(err)
            }
        }
    }

    /// Start a session from an in-memory pool and keep the pool for restarts.
    pub async fn start(&mut self, pool: Vec<Question>) {
        info!(pool = pool.len(), requested = self.question_count, "starting quiz");
        self.pool = Some(pool);
        self.refresh_history().await;
        self.begin_session().await;
    }

    /// Re-render the stored history.
    pub async fn refresh_history(&mut self) {
        let entries = self.history.list().await;
        self.presenter.render_history(&entries);
    }

    async fn begin_session(&mut self) {
        let Some(pool) = self.pool.as_deref() else {
            return;
        };
        let session = QuizSession::start(pool, self.question_count, &mut self.rng);
        debug!(total = session.total(), "session sampled");
        self.session = Some(session);

        self.presenter.set_restart_visible(false);
        self.show_current().await;
    }

    async fn show_current(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        self.presenter.clear_feedback();
        self.presenter.set_next_visible(false);

        match session.current_question() {
            Some(question) => {
                let view = QuestionView::new(question, session.progress());
                self.presenter.render_question(&view);
                self.presenter.set_choices_enabled(true);
            }
            None => {
                let result = session.result().unwrap_or(SessionResult::new(0, 0));
                self.finish(result).await;
            }
        }
    }

    async fn finish(&mut self, result: SessionResult) {
        info!(score = result.score, total = result.total, "quiz finished");
        if let Err(err) = self.history.record(result).await {
            warn!(error = %err, "failed to record quiz result");
        }

        self.presenter.set_choices_enabled(false);
        self.presenter.clear_feedback();
        self.presenter.set_next_visible(false);
        self.presenter.render_finished(result);
        self.presenter.set_restart_visible(true);
        self.refresh_history().await;
    }
}

#[async_trait]
impl<P: Presenter> QuizCommands for QuizController<P> {
    async fn on_choice_selected(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(feedback) = session.submit_answer(index) else {
            debug!(index, "choice ignored");
            return;
        };

        self.presenter.set_choices_enabled(false);
        self.presenter.show_feedback(&feedback);
        self.presenter.set_next_visible(true);
    }

    async fn on_next_requested(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance() {
            Advance::Ignored => debug!("next ignored"),
            Advance::Next => self.show_current().await,
            Advance::Finished(result) => self.finish(result).await,
        }
    }

    async fn on_restart_requested(&mut self) {
        if self.state() != ControllerState::Finished {
            debug!("restart ignored");
            return;
        }
        self.begin_session().await;
    }
}
