use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// One child of a listed directory, as reported by the reader.
///
/// `file_name` keeps the raw name so paths built from it stay valid even
/// when the name is not UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub file_name: OsString,
    pub is_dir: bool,
}

impl DirChild {
    pub fn dir(file_name: impl Into<OsString>) -> Self {
        Self {
            file_name: file_name.into(),
            is_dir: true,
        }
    }

    pub fn file(file_name: impl Into<OsString>) -> Self {
        Self {
            file_name: file_name.into(),
            is_dir: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadDirError {
    #[error("no such file or directory")]
    NotFound,

    #[error("permission denied")]
    PermissionDenied,

    #[error("{0}")]
    Other(io::Error),
}

impl From<io::Error> for ReadDirError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReadDirError::NotFound,
            io::ErrorKind::PermissionDenied => ReadDirError::PermissionDenied,
            _ => ReadDirError::Other(err),
        }
    }
}

/// Source of directory listings for the navigator.
pub trait DirectoryReader {
    /// Lists the immediate children of `dir`, in no particular order.
    fn list_children(&self, dir: &Path) -> Result<Vec<DirChild>, ReadDirError>;

    /// The user's home directory, used when a filesystem root cannot be read.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Reads the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    fn list_children(&self, dir: &Path) -> Result<Vec<DirChild>, ReadDirError> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            // Symlinks report their own type, not the target's.
            let is_dir = entry.file_type()?.is_dir();
            children.push(DirChild {
                file_name: entry.file_name(),
                is_dir,
            });
        }
        Ok(children)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
