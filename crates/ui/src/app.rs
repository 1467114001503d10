use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizView;
use crate::vm::QuizScreen;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut screen = use_signal(QuizScreen::loading);

    let load_ctx = ctx.clone();
    use_future(move || {
        let ctx = load_ctx.clone();
        async move {
            screen.set(ctx.load().await);
        }
    });

    let choice_ctx = ctx.clone();
    let next_ctx = ctx.clone();
    let restart_ctx = ctx;
    let current = screen.read().clone();

    rsx! {
        div { class: "app-root",
            h1 { "Quiz" }
            QuizView {
                screen: current,
                on_choice: move |index: usize| {
                    let ctx = choice_ctx.clone();
                    spawn(async move {
                        screen.set(ctx.choose(index).await);
                    });
                },
                on_next: move |_: ()| {
                    let ctx = next_ctx.clone();
                    spawn(async move {
                        screen.set(ctx.next().await);
                    });
                },
                on_restart: move |_: ()| {
                    let ctx = restart_ctx.clone();
                    spawn(async move {
                        screen.set(ctx.restart().await);
                    });
                },
            }
        }
    }
}
