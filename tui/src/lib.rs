// Forbid accidental stdout/stderr writes in the *library* portion of the TUI.
// The standalone `nav` binary prints startup errors to stderr, so only the
// library is held to this.
#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::fs::OpenOptions;
use std::path::Path;

use color_eyre::eyre::Result;
use color_eyre::eyre::eyre;
use nav_core::Navigator;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod app;
mod cli;
pub mod config;
mod entry_list;
mod env_utils;
pub mod launcher;
mod render;
mod status_line;
mod toast;
mod tui;

pub use cli::Cli;

use crate::app::App;
use crate::config::NavConfig;
use crate::launcher::DETECTION_VARS;
use crate::launcher::HostOs;
use crate::launcher::ProcessSpawner;
use crate::launcher::TerminalCommand;

const LOG_FILE_NAME: &str = "nav-tui.log";
const DEFAULT_LOG_FILTER: &str = "nav_core=info,nav_tui=info";

pub fn run_main(cli: Cli) -> Result<()> {
    let nav_home = config::find_nav_home()
        .map_err(|err| eyre!("Could not locate nav home directory: {err}"))?;
    let config = match &cli.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::load_from_home(&nav_home)?,
    };

    // Logging is best-effort: a read-only home must not stop the browser.
    let _log_guard = init_logging(&nav_home).ok();

    let mut navigator = Navigator::new(&cli.directory)
        .map_err(|err| eyre!("Error creating navigator: {err}"))?;
    navigator.scan()?;

    let override_cmd = cli.terminal.as_deref().or(config.terminal.as_deref());
    let os = HostOs::current();
    let env = env_utils::env_subset_lossy(DETECTION_VARS);
    let command = TerminalCommand::detect(override_cmd, &env, os);
    tracing::info!(
        start = %navigator.current_path().display(),
        terminal = %command.program,
        "starting nav"
    );
    let spawner = ProcessSpawner::new(command, os);

    let mut terminal = match tui::init() {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = tui::restore();
            return Err(eyre!("Error initializing screen: {err}"));
        }
    };
    let result = App::new(navigator, Box::new(spawner)).run(&mut terminal);
    tui::restore().map_err(|err| eyre!("Error restoring terminal: {err}"))?;
    result
}

fn init_logging(nav_home: &Path) -> std::io::Result<WorkerGuard> {
    let log_dir = config::log_dir(nav_home);
    std::fs::create_dir_all(&log_dir)?;

    let mut log_file_opts = OpenOptions::new();
    log_file_opts.create(true).append(true);

    // Ensure the file is only readable and writable by the current user.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        log_file_opts.mode(0o600);
    }

    let log_file = log_file_opts.open(log_dir.join(LOG_FILE_NAME))?;
    let (non_blocking, guard) = non_blocking(log_file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(guard)
}
