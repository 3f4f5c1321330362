//! Opening a new terminal window rooted at a directory.
//!
//! Which terminal to run is looked up once at startup: an explicit override
//! (`--terminal` or the `terminal` config key), then `$TERMINAL`, then a table
//! keyed on `$TERM_PROGRAM`, then a per-OS default. The flag carrying the
//! working directory depends on the OS and on the program.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use thiserror::Error;

/// Environment variables consulted by [`TerminalCommand::detect`].
pub const DETECTION_VARS: &[&str] = &["TERMINAL", "TERM_PROGRAM"];

#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("no terminal command configured")]
    EmptyCommand,

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl HostOs {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            "windows" => HostOs::Windows,
            _ => HostOs::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl TerminalCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    /// Splits a command line such as `open -a Ghostty`. Returns `None` for a
    /// blank string.
    pub fn parse(command_line: &str) -> Option<Self> {
        let words = shlex::split(command_line)
            .unwrap_or_else(|| command_line.split_whitespace().map(String::from).collect());
        let mut words = words.into_iter();
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Picks the terminal to launch. `env` is a snapshot of the process
    /// environment.
    pub fn detect(override_cmd: Option<&str>, env: &HashMap<String, String>, os: HostOs) -> Self {
        if let Some(command) = override_cmd.and_then(Self::parse) {
            return command;
        }
        if let Some(command) = env.get("TERMINAL").and_then(|value| Self::parse(value)) {
            return command;
        }
        if let Some(command) = env
            .get("TERM_PROGRAM")
            .and_then(|value| Self::from_term_program(value))
        {
            return command;
        }
        Self::os_default(os)
    }

    fn from_term_program(term_program: &str) -> Option<Self> {
        let command = match term_program.to_lowercase().as_str() {
            "ghostty" => Self::new("ghostty", &[]),
            "iterm.app" => Self::new("open", &["-a", "iTerm"]),
            "apple_terminal" => Self::new("open", &["-a", "Terminal"]),
            "wezterm" => Self::new("wezterm", &["start"]),
            "kitty" => Self::new("kitty", &[]),
            "alacritty" => Self::new("alacritty", &[]),
            _ => return None,
        };
        Some(command)
    }

    fn os_default(os: HostOs) -> Self {
        match os {
            HostOs::MacOs => Self::new("open", &["-a", "Terminal"]),
            HostOs::Linux => Self::new("gnome-terminal", &[]),
            HostOs::Windows => Self::new("cmd", &["/c", "start", "cmd", "/k"]),
            HostOs::Other => Self::new("xterm", &[]),
        }
    }

    /// Full argument list for starting in `dir`.
    pub fn args_for(&self, dir: &Path, os: HostOs) -> Vec<String> {
        let dir = dir.display().to_string();
        let mut args = self.args.clone();
        match os {
            HostOs::MacOs if self.program == "open" => args.push(dir),
            HostOs::MacOs | HostOs::Linux => {
                args.push("--working-directory".to_string());
                args.push(dir);
            }
            HostOs::Windows if self.program == "cmd" => {
                args.push("cd".to_string());
                args.push(dir);
            }
            HostOs::Windows => {
                args.push("--starting-directory".to_string());
                args.push(dir);
            }
            HostOs::Other => args.push(dir),
        }
        args
    }
}

pub trait TerminalSpawner {
    /// Starts a terminal in `dir` without waiting for it.
    fn spawn(&self, dir: &Path) -> Result<(), SpawnError>;
}

/// Launches the detected terminal as a detached child process.
#[derive(Debug, Clone)]
pub struct ProcessSpawner {
    command: TerminalCommand,
    os: HostOs,
}

impl ProcessSpawner {
    pub fn new(command: TerminalCommand, os: HostOs) -> Self {
        Self { command, os }
    }
}

impl TerminalSpawner for ProcessSpawner {
    fn spawn(&self, dir: &Path) -> Result<(), SpawnError> {
        if self.command.program.is_empty() {
            return Err(SpawnError::EmptyCommand);
        }
        let args = self.command.args_for(dir, self.os);
        tracing::info!(program = %self.command.program, ?args, "launching terminal");
        let mut child = Command::new(&self.command.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpawnError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;
        // Reap the child off the UI thread so it does not linger as a zombie.
        std::thread::spawn(move || {
            if let Err(err) = child.wait() {
                tracing::debug!("terminal process wait failed: {err}");
            }
        });
        Ok(())
    }
}
