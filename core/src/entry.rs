use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

/// Name of the synthetic entry pointing at the parent directory.
pub const PARENT_ENTRY_NAME: &str = "../";

/// One row of a directory listing. `name` is the display form of the file
/// name; `path` is built from the raw name and always points at the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_hidden: bool,
}

impl Entry {
    pub fn child(dir: &Path, file_name: impl AsRef<OsStr>, is_dir: bool) -> Self {
        let file_name = file_name.as_ref();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            path: dir.join(file_name),
            is_hidden: name.starts_with('.'),
            name,
            is_dir,
        }
    }

    pub fn parent_link(parent: PathBuf) -> Self {
        Self {
            name: PARENT_ENTRY_NAME.to_string(),
            path: parent,
            is_dir: true,
            is_hidden: false,
        }
    }

    pub fn is_parent_link(&self) -> bool {
        self.name == PARENT_ENTRY_NAME
    }

    /// Directory a terminal should start in for this entry: the entry itself
    /// for directories, the containing directory for files.
    pub fn working_dir(&self) -> PathBuf {
        if self.is_dir {
            self.path.clone()
        } else {
            crate::path::parent_or_self(&self.path)
        }
    }

    fn rank(&self) -> u8 {
        if self.is_parent_link() {
            0
        } else if self.is_dir {
            1
        } else {
            2
        }
    }

    /// Listing order: parent link, then directories, then files, each class
    /// by name.
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.name.cmp(&other.name))
    }
}
