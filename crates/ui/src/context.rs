use std::sync::Arc;

use services::{QuestionSource, QuizCommands, QuizController};
use tokio::sync::Mutex;

use crate::vm::QuizScreen;

/// Shared handle the views use to drive the quiz.
///
/// Commands are serialized through the mutex; each returns the screen as it
/// stands after the command ran.
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<Mutex<QuizController<QuizScreen>>>,
    source: QuestionSource,
}

impl AppContext {
    #[must_use]
    pub fn new(controller: QuizController<QuizScreen>, source: QuestionSource) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            source,
        }
    }

    /// Fetch the question bank and start the first session.
    pub async fn load(&self) -> QuizScreen {
        let mut controller = self.controller.lock().await;
        // A failed load is already logged and rendered as the screen's error.
        let _ = controller.load(&self.source).await;
        controller.presenter().clone()
    }

    pub async fn choose(&self, index: usize) -> QuizScreen {
        let mut controller = self.controller.lock().await;
        controller.on_choice_selected(index).await;
        controller.presenter().clone()
    }

    pub async fn next(&self) -> QuizScreen {
        let mut controller = self.controller.lock().await;
        controller.on_next_requested().await;
        controller.presenter().clone()
    }

    pub async fn restart(&self) -> QuizScreen {
        let mut controller = self.controller.lock().await;
        controller.on_restart_requested().await;
        controller.presenter().clone()
    }
}
