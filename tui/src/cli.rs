use std::path::PathBuf;

use clap::Parser;

const AFTER_HELP: &str = "\
KEYBINDINGS:
  ↑/↓          Navigate up/down
  PgUp/PgDn    Move one page
  Home/End     Jump to first/last entry
  Enter        Open directory / open file's parent in terminal
  o            Open selected item in new terminal
  /            Search (type to filter, Esc to exit)
  q, Ctrl+C    Quit

TERMINAL DETECTION:
  nav picks the terminal to launch in this order:
  1. --terminal, or `terminal` in $NAV_HOME/config.toml
  2. $TERMINAL environment variable
  3. $TERM_PROGRAM detection (iTerm2, Ghostty, WezTerm, kitty, Alacritty)
  4. OS defaults (Terminal.app, gnome-terminal, cmd)

  On Linux and macOS nav appends `--working-directory <dir>` to the
  command (macOS `open` commands get the bare directory instead).

  Examples:
    export TERMINAL=\"open -a Ghostty\"
    export TERMINAL=\"kitty\"
    export TERMINAL=\"alacritty\"";

/// Terminal file navigator.
#[derive(Parser, Debug, Clone)]
#[command(name = "nav", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to start in.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Terminal command used to open new windows, e.g. "kitty" or
    /// "open -a Ghostty". Overrides config and environment detection.
    #[arg(long, value_name = "COMMAND")]
    pub terminal: Option<String>,

    /// Read settings from this file instead of $NAV_HOME/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
