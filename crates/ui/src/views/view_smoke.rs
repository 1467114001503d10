use dioxus::prelude::*;
use quiz_core::model::SessionResult;
use services::QuestionView;

use crate::views::QuizView;
use crate::vm::{FeedbackVm, HistoryLineVm, QuizScreen, ScreenStatus};

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    screen: QuizScreen,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    rsx! {
        QuizView {
            screen: props.screen.clone(),
            on_choice: move |_: usize| {},
            on_next: move |_: ()| {},
            on_restart: move |_: ()| {},
        }
    }
}

fn render(screen: QuizScreen) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn question_screen() -> QuizScreen {
    QuizScreen {
        status: ScreenStatus::Question,
        question: Some(QuestionView {
            position: 2,
            total: 3,
            text: "Capital of Japan?".into(),
            choices: vec!["Kyoto".into(), "Tokyo".into()],
        }),
        choices_enabled: true,
        ..QuizScreen::default()
    }
}

#[test]
fn loading_screen_renders_placeholder() {
    let html = render(QuizScreen::loading());
    assert!(html.contains("Loading questions..."), "{html}");
    assert!(html.contains("No finished quizzes yet."), "{html}");
}

#[test]
fn question_screen_renders_choices_and_position() {
    let html = render(question_screen());
    assert!(html.contains("Question 2 of 3"), "{html}");
    assert!(html.contains("Capital of Japan?"), "{html}");
    assert!(html.contains("Kyoto"), "{html}");
    assert!(html.contains("Tokyo"), "{html}");
    assert!(!html.contains("Next"), "{html}");
}

#[test]
fn answered_screen_shows_feedback_and_next() {
    let mut screen = question_screen();
    screen.choices_enabled = false;
    screen.next_visible = true;
    screen.feedback = Some(FeedbackVm {
        is_correct: true,
        message: "Correct! Tokyo since 1868.".into(),
    });

    let html = render(screen);
    assert!(html.contains("Correct! Tokyo since 1868."), "{html}");
    assert!(html.contains("feedback correct"), "{html}");
    assert!(html.contains("Next"), "{html}");
}

#[test]
fn finished_screen_shows_score_restart_and_history() {
    let screen = QuizScreen {
        status: ScreenStatus::Finished,
        result: Some(SessionResult::new(2, 3)),
        restart_visible: true,
        history: vec![HistoryLineVm {
            label: "2024/05/03 14:05:09 : 2 / 3".into(),
        }],
        ..QuizScreen::default()
    };

    let html = render(screen);
    assert!(html.contains("Quiz complete! Your score: 2 / 3"), "{html}");
    assert!(html.contains("Try again"), "{html}");
    assert!(html.contains("2024/05/03 14:05:09 : 2 / 3"), "{html}");
}

#[test]
fn failed_screen_shows_error() {
    let screen = QuizScreen {
        status: ScreenStatus::Failed,
        error: Some("Failed to load questions: not found".into()),
        ..QuizScreen::default()
    };

    let html = render(screen);
    assert!(html.contains("Failed to load questions: not found"), "{html}");
    assert!(!html.contains("Loading questions..."), "{html}");
}
