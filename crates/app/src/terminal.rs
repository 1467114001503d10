//! Line-oriented front end for running a quiz in a terminal.

use std::io::Write;

use quiz_core::model::{HistoryEntry, SessionResult};
use quiz_core::session::AnswerFeedback;
use services::{
    ControllerState, Presenter, QuestionSource, QuestionView, QuizCommands, QuizController,
    feedback_message, result_message,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Writes every rendering call as plain text lines.
///
/// The first write failure is logged and later output is skipped; the run
/// loop stops once the terminal is gone.
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    restart_visible: bool,
    closed: bool,
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            restart_visible: false,
            closed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// True once a write to the terminal has failed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn line(&mut self, text: &str) {
        if self.closed {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            debug!(error = %err, "terminal output closed");
            self.closed = true;
        }
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn render_loading(&mut self) {
        self.line("Loading questions...");
    }

    fn render_question(&mut self, question: &QuestionView) {
        self.line("");
        self.line(&question.position_label());
        self.line(&question.text);
        for (n, choice) in question.choices.iter().enumerate() {
            self.line(&format!("  {}) {choice}", n + 1));
        }
    }

    fn set_choices_enabled(&mut self, _enabled: bool) {}

    fn show_feedback(&mut self, feedback: &AnswerFeedback) {
        self.line(&feedback_message(feedback));
    }

    fn clear_feedback(&mut self) {}

    fn set_next_visible(&mut self, visible: bool) {
        if visible {
            self.line("Press Enter for the next question.");
        }
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
    }

    fn render_finished(&mut self, result: SessionResult) {
        self.line("");
        self.line(&result_message(result));
    }

    fn render_history(&mut self, entries: &[HistoryEntry]) {
        if !entries.is_empty() {
            self.line("Score history:");
            for entry in entries {
                self.line(&format!("  {entry}"));
            }
        }
        if self.restart_visible {
            self.line("Type r to try again or q to quit.");
        }
    }

    fn report_load_failure(&mut self, message: &str) {
        self.line(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Zero-based choice index.
    Choose(usize),
    Next,
    Restart,
    Quit,
}

/// Interpret one input line given where the quiz stands.
///
/// Choices are typed 1-based. A blank line advances once the current question
/// has been answered.
#[must_use]
pub fn parse_command(input: &str, state: ControllerState, answered: bool) -> Option<TerminalCommand> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(TerminalCommand::Quit),
        "r" | "restart" if state == ControllerState::Finished => {
            return Some(TerminalCommand::Restart);
        }
        "" | "n" | "next" if state == ControllerState::InProgress && answered => {
            return Some(TerminalCommand::Next);
        }
        _ => {}
    }

    if state != ControllerState::InProgress || answered {
        return None;
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .map(TerminalCommand::Choose)
}

fn is_answered<P: Presenter>(controller: &QuizController<P>) -> bool {
    controller
        .session()
        .is_some_and(|session| session.pending_feedback().is_some())
}

/// Load `source` and run the quiz against stdin until the user quits or input ends.
///
/// A failed load has already been reported through the presenter, so it ends
/// the run without an error.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run<W: Write + Send>(
    mut controller: QuizController<TerminalPresenter<W>>,
    source: &QuestionSource,
) -> std::io::Result<()> {
    if controller.load(source).await.is_err() {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = parse_command(&line, controller.state(), is_answered(&controller));
        debug!(input = %line.trim(), ?command, "terminal input");
        match command {
            Some(TerminalCommand::Choose(index)) => controller.on_choice_selected(index).await,
            Some(TerminalCommand::Next) => controller.on_next_requested().await,
            Some(TerminalCommand::Restart) => controller.on_restart_requested().await,
            Some(TerminalCommand::Quit) => break,
            None => {}
        }
        if controller.presenter().is_closed() {
            break;
        }
    }
    Ok(())
}
