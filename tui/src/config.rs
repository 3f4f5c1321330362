use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

const CONFIG_TOML_FILE: &str = "config.toml";

/// Settings read from `config.toml` in the nav home directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Terminal command used for "open in terminal", in the same format as
    /// `$TERMINAL`. Takes precedence over environment detection.
    pub terminal: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl NavConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_home(nav_home: &Path) -> Result<Self, ConfigError> {
        Self::load(&nav_home.join(CONFIG_TOML_FILE))
    }
}

/// Returns the nav home directory: `$NAV_HOME` when set and non-empty,
/// otherwise `~/.nav`. The directory is not required to exist.
pub fn find_nav_home() -> io::Result<PathBuf> {
    if let Ok(val) = std::env::var("NAV_HOME")
        && !val.is_empty()
    {
        return Ok(PathBuf::from(val));
    }
    let mut home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not find home directory")
    })?;
    home.push(".nav");
    Ok(home)
}

pub fn log_dir(nav_home: &Path) -> PathBuf {
    nav_home.join("log")
}
