use dioxus::prelude::*;

use crate::vm::HistoryLineVm;

#[component]
pub fn HistoryList(lines: Vec<HistoryLineVm>) -> Element {
    rsx! {
        section { class: "history",
            h3 { "Score history" }
            if lines.is_empty() {
                p { class: "history-empty", "No finished quizzes yet." }
            } else {
                ul { class: "history-list",
                    for (index, line) in lines.iter().enumerate() {
                        li { key: "{index}", "{line.label}" }
                    }
                }
            }
        }
    }
}
