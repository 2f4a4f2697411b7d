//! taskflow - A terminal task tracker with local persistent storage.
//!
//! This is the main binary that launches the TUI application.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;
use clap::Parser;
use taskflow_config::{Config, persistence};
use taskflow_store::{FileStorage, MemoryStorage, RepositoryOptions, TaskRepository, TaskStore};
use taskflow_tui::{App, Route, terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "taskflow.log";

#[derive(Debug, Parser)]
#[command(name = "taskflow")]
#[command(about = "Track tasks in your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file to use instead of searching the default locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the task storage
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Screen to open at startup, e.g. `/create` or `/edit/<id>`
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Start with an empty list when nothing is stored yet
    #[arg(long)]
    no_seed: bool,
}

/// Sends logs to `<dir>/taskflow.log`. Logs are dropped if the file cannot
/// be opened, since the terminal belongs to the UI.
fn init_logging(dir: &Path) {
    let file = fs::create_dir_all(dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    });
    let Ok(file) = file else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if cli.no_seed {
        config.seed_on_first_run = false;
    }
    Ok(config)
}

/// Opens the task repository on disk, or in memory if the storage directory
/// is unusable.
fn open_repository(config: &Config) -> TaskRepository {
    let storage = config
        .storage_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| FileStorage::with_path(dir).map_err(anyhow::Error::from));

    let store = match storage {
        Ok(storage) => {
            info!(path = %storage.base_path().display(), "using file storage");
            TaskStore::new(storage)
        }
        Err(e) => {
            warn!(error = %e, "storage unavailable, changes will not be saved");
            TaskStore::new(MemoryStorage::new())
        }
    };

    let options = RepositoryOptions::new(config.storage_key.clone())
        .seed_on_first_run(config.seed_on_first_run);
    TaskRepository::open(store, options)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let log_dir = match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => persistence::default_data_dir(),
    };
    if let Ok(dir) = log_dir {
        init_logging(&dir);
    }

    let mut repo = open_repository(&config);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut session = terminal::TerminalSession::start()?;

    let result = {
        let mut app = App::new(&mut repo, config.timing.clone());
        app.navigate(Route::parse(&cli.route));
        app.run(session.terminal_mut()).await
    };

    // Always restore terminal, even if app.run() failed
    session.restore()?;

    if !repo.flush() {
        warn!("final save failed");
    }

    result
}
