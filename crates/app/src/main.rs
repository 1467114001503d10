use std::fmt;

use services::{Clock, HistoryService, QuestionSource, QuizController, QuizSettings};
use storage::{HistoryStore, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalPresenter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidDbUrl { raw: String },
    DesktopUnavailable,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::DesktopUnavailable => {
                write!(f, "--desktop requires building with the `desktop` feature")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path|url>] [--count <n>] [--db <sqlite_url>]");
    eprintln!("  cargo run -p app --features desktop -- --desktop [...]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions questions.json");
    eprintln!("  --count 10");
    eprintln!("  --db sqlite://quiz.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_QUESTION_COUNT, QUIZ_DB_URL, RUST_LOG");
}

struct Args {
    settings: QuizSettings,
    desktop: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut settings = QuizSettings::from_env();
        settings.db_url = normalize_sqlite_url(settings.db_url);
        let mut desktop = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    settings.questions = QuestionSource::parse(&value);
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    settings.question_count = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    settings.db_url = normalize_sqlite_url(value);
                }
                "--desktop" => desktop = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if desktop && !cfg!(feature = "desktop") {
            return Err(ArgsError::DesktopUnavailable);
        }
        Ok(Self { settings, desktop })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "desktop")]
fn launch_desktop(controller: QuizController<ui::vm::QuizScreen>, source: QuestionSource) {
    use dioxus::LaunchBuilder;
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

    let context = ui::AppContext::new(controller, source);
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(ui::App);
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Args { settings, desktop } = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&settings.db_url)?;
    let storage = Storage::sqlite(&settings.db_url).await?;
    let history = HistoryService::new(Clock::default_clock(), HistoryStore::new(storage.slots));
    info!(
        questions = %settings.questions,
        count = settings.question_count,
        db = %settings.db_url,
        desktop,
        "starting quiz"
    );

    #[cfg(feature = "desktop")]
    if desktop {
        let controller =
            QuizController::new(ui::vm::QuizScreen::loading(), history, settings.question_count);
        launch_desktop(controller, settings.questions);
        return Ok(());
    }

    let presenter = TerminalPresenter::new(std::io::stdout());
    let controller = QuizController::new(presenter, history, settings.question_count);
    terminal::run(controller, &settings.questions).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
