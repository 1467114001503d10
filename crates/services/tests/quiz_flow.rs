use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{Choice, HistoryEntry, Question, SessionResult};
use quiz_core::session::AnswerFeedback;
use quiz_core::time::{fixed_clock, format_timestamp};
use services::{
    ControllerState, HistoryService, Presenter, QuestionSource, QuestionView, QuizCommands,
    QuizController,
};
use storage::repository::{SlotRepository, StorageError};
use storage::{HistoryStore, InMemoryRepository};

#[derive(Debug, Default)]
struct RecordingPresenter {
    loading: bool,
    question: Option<QuestionView>,
    questions_shown: usize,
    choices_enabled: bool,
    feedback: Option<AnswerFeedback>,
    next_visible: bool,
    restart_visible: bool,
    finished: Option<SessionResult>,
    history: Vec<HistoryEntry>,
    failure: Option<String>,
}

impl Presenter for RecordingPresenter {
    fn render_loading(&mut self) {
        self.loading = true;
    }

    fn render_question(&mut self, question: &QuestionView) {
        self.loading = false;
        self.finished = None;
        self.questions_shown += 1;
        self.question = Some(question.clone());
    }

    fn set_choices_enabled(&mut self, enabled: bool) {
        self.choices_enabled = enabled;
    }

    fn show_feedback(&mut self, feedback: &AnswerFeedback) {
        self.feedback = Some(feedback.clone());
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
        self.loading = false;
        self.question = None;
        self.finished = Some(result);
    }

    fn render_history(&mut self, entries: &[HistoryEntry]) {
        self.history = entries.to_vec();
    }

    fn report_load_failure(&mut self, message: &str) {
        self.failure = Some(message.to_owned());
    }
}

fn utc(at: chrono::DateTime<chrono::Utc>) -> String {
    format_timestamp(at, &chrono::Utc)
}

fn pool(len: usize) -> Vec<Question> {
    (0..len)
        .map(|n| {
            Question::new(
                format!("Q{n}"),
                vec![Choice::new("a"), Choice::new("b"), Choice::new("c")],
                n % 3,
                format!("E{n}"),
            )
            .unwrap()
        })
        .collect()
}

fn controller_with(
    slots: Arc<dyn SlotRepository>,
    count: usize,
) -> QuizController<RecordingPresenter> {
    let history = HistoryService::new(fixed_clock(), HistoryStore::new(slots)).with_formatter(utc);
    QuizController::new(RecordingPresenter::default(), history, count).with_seed(7)
}

fn current_correct(controller: &QuizController<RecordingPresenter>) -> usize {
    controller
        .session()
        .and_then(|s| s.current_question())
        .map(Question::correct_index)
        .expect("current question")
}

#[tokio::test]
async fn small_pool_all_correct_records_full_score() {
    let repo = InMemoryRepository::new();
    let mut controller = controller_with(Arc::new(repo.clone()), 10);
    controller.start(pool(3)).await;

    let view = controller.presenter().question.clone().unwrap();
    assert_eq!(view.total, 3);
    assert_eq!(view.position_label(), "Question 1 of 3");

    while controller.state() == ControllerState::InProgress {
        let correct = current_correct(&controller);
        controller.on_choice_selected(correct).await;
        assert!(controller.presenter().feedback.as_ref().unwrap().is_correct);
        assert!(!controller.presenter().choices_enabled);
        assert!(controller.presenter().next_visible);
        controller.on_next_requested().await;
    }

    let presenter = controller.presenter();
    assert_eq!(presenter.finished, Some(SessionResult::new(3, 3)));
    assert!(presenter.restart_visible);
    assert!(!presenter.next_visible);
    assert_eq!(
        presenter.history,
        vec![HistoryEntry::new("2023/11/14 22:13:20", 3, 3)]
    );

    let store = HistoryStore::new(Arc::new(repo));
    assert_eq!(store.load_all().await.last().unwrap().score, 3);
}

#[tokio::test]
async fn full_pool_mixed_answers_score_exactly() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 10);
    controller.start(pool(10)).await;
    assert_eq!(controller.session().unwrap().total(), 10);

    let mut expected = 0;
    let mut turn = 0;
    while controller.state() == ControllerState::InProgress {
        let correct = current_correct(&controller);
        let choice = if turn % 3 == 0 {
            expected += 1;
            correct
        } else {
            (correct + 1) % 3
        };
        controller.on_choice_selected(choice).await;
        controller.on_next_requested().await;
        turn += 1;

        let session = controller.session().unwrap();
        assert!(session.score() <= session.current_index());
        assert!(session.current_index() <= session.total());
    }

    assert_eq!(
        controller.presenter().finished,
        Some(SessionResult::new(expected, 10))
    );
}

#[tokio::test]
async fn empty_pool_finishes_immediately_with_zero_of_zero() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 10);
    controller.start(Vec::new()).await;

    assert_eq!(controller.state(), ControllerState::Finished);
    let presenter = controller.presenter();
    assert_eq!(presenter.finished, Some(SessionResult::new(0, 0)));
    assert_eq!(presenter.questions_shown, 0);
    assert!(presenter.restart_visible);
    assert_eq!(presenter.history.len(), 1);
}

#[tokio::test]
async fn double_submission_does_not_double_count() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 1);
    controller.start(pool(3)).await;

    let correct = current_correct(&controller);
    controller.on_choice_selected(correct).await;
    controller.on_choice_selected(correct).await;
    controller.on_choice_selected((correct + 1) % 3).await;
    assert_eq!(controller.presenter().feedback.as_ref().unwrap().chosen, correct);

    controller.on_next_requested().await;
    assert_eq!(controller.presenter().finished, Some(SessionResult::new(1, 1)));
}

#[tokio::test]
async fn next_without_answer_is_ignored() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 2);
    controller.start(pool(2)).await;

    controller.on_next_requested().await;
    assert_eq!(controller.session().unwrap().current_index(), 0);
    assert_eq!(controller.presenter().questions_shown, 1);
}

#[tokio::test]
async fn restart_only_after_finish_and_appends_again() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 2);
    controller.start(pool(5)).await;

    controller.on_restart_requested().await;
    assert_eq!(controller.presenter().questions_shown, 1);

    for _ in 0..2 {
        controller.on_choice_selected(0).await;
        controller.on_next_requested().await;
    }
    assert_eq!(controller.state(), ControllerState::Finished);

    controller.on_restart_requested().await;
    assert_eq!(controller.state(), ControllerState::InProgress);
    let presenter = controller.presenter();
    assert!(!presenter.restart_visible);
    assert!(presenter.finished.is_none());
    assert_eq!(presenter.question.as_ref().unwrap().position, 1);
    assert_eq!(controller.session().unwrap().total(), 2);

    for _ in 0..2 {
        controller.on_choice_selected(1).await;
        controller.on_next_requested().await;
    }
    assert_eq!(controller.presenter().history.len(), 2);
}

#[tokio::test]
async fn load_failure_leaves_quiz_unpopulated() {
    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 10);
    let missing = QuestionSource::File(PathBuf::from("/nonexistent/quiz/questions.json"));

    assert!(controller.load(&missing).await.is_err());
    assert_eq!(controller.state(), ControllerState::Loading);
    let presenter = controller.presenter();
    assert!(presenter.failure.as_deref().unwrap().starts_with("Failed to load questions"));
    assert!(presenter.question.is_none());

    controller.on_choice_selected(0).await;
    controller.on_next_requested().await;
    controller.on_restart_requested().await;
    assert_eq!(controller.state(), ControllerState::Loading);
}

#[tokio::test]
async fn load_from_file_starts_a_session() {
    let path = std::env::temp_dir().join(format!("quiz-flow-{}.json", std::process::id()));
    tokio::fs::write(
        &path,
        r#"[{"question": "Q", "choices": [{"text": "x"}, {"text": "y"}], "correct": 1, "explanation": "E"}]"#,
    )
    .await
    .unwrap();

    let mut controller = controller_with(Arc::new(InMemoryRepository::new()), 10);
    controller.load(&QuestionSource::File(path.clone())).await.unwrap();

    let view = controller.presenter().question.clone().unwrap();
    assert_eq!(view.text, "Q");
    assert_eq!(view.choices, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(view.total, 1);

    tokio::fs::remove_file(&path).await.unwrap();
}

struct ReadOnlySlots;

#[async_trait]
impl SlotRepository for ReadOnlySlots {
    async fn read_slot(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn write_slot(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".into()))
    }
}

#[tokio::test]
async fn history_write_failure_is_not_fatal() {
    let mut controller = controller_with(Arc::new(ReadOnlySlots), 1);
    controller.start(pool(1)).await;

    controller.on_choice_selected(0).await;
    controller.on_next_requested().await;

    let presenter = controller.presenter();
    assert_eq!(presenter.finished, Some(SessionResult::new(1, 1)));
    assert!(presenter.restart_visible);
    assert!(presenter.history.is_empty());
}
