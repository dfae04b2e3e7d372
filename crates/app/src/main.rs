use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quest_core::model::LevelForms;
use services::{AppServices, ProgressTracker, talk_message};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use ui::{App, UiApp, build_app_context};

const DEFAULT_CATALOG: &str = include_str!("../data/default_catalog.json");

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
    CatalogRead { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::CatalogRead { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ArgsError {}

/// Gamified study checklist.
#[derive(Debug, Parser)]
#[command(name = "study-quest", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database holding saved progress.
    #[arg(
        long,
        global = true,
        env = "STUDY_QUEST_DB_URL",
        default_value = "sqlite:study_quest.sqlite3",
        value_parser = parse_db_url
    )]
    db: String,

    /// Catalog JSON file to use instead of the built-in one.
    #[arg(long, global = true, env = "STUDY_QUEST_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the checklist window (default).
    Ui,
    /// Print overall and per-section progress.
    Status,
    /// Clear all saved progress.
    Reset,
}

struct DesktopApp {
    tracker: Arc<ProgressTracker>,
}

impl UiApp for DesktopApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}

fn parse_db_url(raw: &str) -> Result<String, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: raw.to_owned() });
    }
    Ok(normalize_sqlite_url(raw))
}

fn normalize_sqlite_url(raw: &str) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw.to_owned();
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
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
            raw: db_url.to_owned(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_owned(),
        }
        .into());
    }

    let path = Path::new(path);
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

fn load_catalog_json(path: Option<&Path>) -> Result<String, ArgsError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ArgsError::CatalogRead {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(DEFAULT_CATALOG.to_owned()),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("app=info,services=info,storage=info")),
        )
        .with(log_fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn print_status(tracker: &ProgressTracker) {
    let snapshot = tracker.snapshot();
    let form = tracker.current_form();
    println!(
        "Realm {} {} {}  {}% ({}/{})",
        snapshot.level, form.icon, form.name, snapshot.percent, snapshot.checked, snapshot.total
    );
    println!("{}", talk_message(&form));
    println!();

    let catalog = tracker.catalog();
    for (section, progress) in catalog.sections().iter().zip(tracker.section_progress()) {
        println!(
            "  {:<3} {:<40} {}",
            section.icon(),
            section.title(),
            progress.status_label()
        );
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Ui);
    let catalog_json = load_catalog_json(cli.catalog.as_deref())?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&cli.db)?;
    let services = AppServices::new_sqlite(&cli.db, &catalog_json, LevelForms::default()).await?;
    let tracker = services.tracker();

    match command {
        Command::Ui => {
            info!(db = %cli.db, "launching desktop window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { tracker });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Study Quest")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            print_status(&tracker);
            Ok(())
        }
        Command::Reset => {
            let snapshot = tracker.reset().await?;
            info!(total = snapshot.total, "progress reset");
            println!("Progress cleared. Realm {} again.", snapshot.level);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
