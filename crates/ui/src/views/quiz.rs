use dioxus::prelude::*;
use services::{QuestionView, result_message};

use crate::views::HistoryList;
use crate::vm::{QuizScreen, ScreenStatus};

#[component]
pub fn QuizView(
    screen: QuizScreen,
    on_choice: EventHandler<usize>,
    on_next: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let enabled = screen.choices_enabled;
    let question = screen.question.clone().map(|question| {
        rsx! {
            QuestionCard { question, enabled, on_choice }
        }
    });
    let feedback = screen.feedback.clone().map(|feedback| {
        let class = if feedback.is_correct {
            "feedback correct"
        } else {
            "feedback incorrect"
        };
        rsx! {
            p { class: "{class}", "{feedback.message}" }
        }
    });
    let result = screen.result.map(|result| {
        let message = result_message(result);
        rsx! {
            h2 { class: "result", "{message}" }
        }
    });
    let error = screen.error.clone().map(|error| {
        rsx! {
            p { class: "error", "{error}" }
        }
    });

    rsx! {
        div { class: "page quiz",
            if screen.status == ScreenStatus::Loading {
                p { class: "loading", "Loading questions..." }
            }
            {error}
            {question}
            {result}
            {feedback}
            if screen.next_visible {
                button { class: "next", onclick: move |_| on_next.call(()), "Next" }
            }
            if screen.restart_visible {
                button { class: "restart", onclick: move |_| on_restart.call(()), "Try again" }
            }
            HistoryList { lines: screen.history.clone() }
        }
    }
}

#[component]
pub fn QuestionCard(question: QuestionView, enabled: bool, on_choice: EventHandler<usize>) -> Element {
    let label = question.position_label();

    rsx! {
        div { class: "question",
            p { class: "position", "{label}" }
            h2 { class: "question-text", "{question.text}" }
            div { class: "choices",
                for (index, text) in question.choices.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "choice",
                        disabled: !enabled,
                        onclick: move |_| on_choice.call(index),
                        "{text}"
                    }
                }
            }
        }
    }
}
