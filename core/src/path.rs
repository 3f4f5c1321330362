//! Path helpers shared by the navigator and its callers.

use std::path::Path;
use std::path::PathBuf;

use path_absolutize::Absolutize;

use crate::error::NavigatorError;
use crate::error::Result;

/// Makes `path` absolute against the working directory and folds away `.`
/// and `..` components. The path does not need to exist.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    path.absolutize()
        .map(std::borrow::Cow::into_owned)
        .map_err(|source| NavigatorError::PathResolution {
            path: path.to_path_buf(),
            source,
        })
}

/// A path with no parent: `/`, or a drive root such as `C:\`.
pub fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}

pub fn parent_or_self(path: &Path) -> PathBuf {
    path.parent().unwrap_or(path).to_path_buf()
}
