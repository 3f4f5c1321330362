//! Directory navigation state for the `nav` terminal file browser.
//!
//! [`Navigator`] owns the scan of the current directory, the filtered view
//! produced by the search term, and the selection cursor. Listing the
//! filesystem goes through the [`DirectoryReader`] trait so the state machine
//! can be driven without touching a real disk.

mod entry;
mod error;
pub mod fs;
mod navigator;
pub mod path;

pub use entry::Entry;
pub use entry::PARENT_ENTRY_NAME;
pub use error::NavigatorError;
pub use error::Result;
pub use fs::DirChild;
pub use fs::DirectoryReader;
pub use fs::FsReader;
pub use fs::ReadDirError;
pub use navigator::Navigator;
pub use navigator::OpenOutcome;
