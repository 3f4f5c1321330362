use std::path::PathBuf;

use thiserror::Error;

use crate::fs::ReadDirError;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("cannot resolve path '{}': {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: Cannot access directory '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Cannot read directory '{}': {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ReadDirError,
    },
}

impl NavigatorError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, NavigatorError::PermissionDenied { .. })
    }

    /// Directory the failing operation was looking at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            NavigatorError::PathResolution { path, .. }
            | NavigatorError::PermissionDenied { path }
            | NavigatorError::Scan { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
