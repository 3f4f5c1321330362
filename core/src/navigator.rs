use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::entry::Entry;
use crate::error::NavigatorError;
use crate::error::Result;
use crate::fs::DirectoryReader;
use crate::fs::FsReader;
use crate::fs::ReadDirError;
use crate::path;

/// What [`Navigator::open_selected`] did with the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The list was empty; nothing happened.
    NoSelection,
    /// The navigator moved into the selected directory and rescanned it.
    Descended,
    /// The selection is a file; the caller should open a terminal here.
    LaunchTerminal(PathBuf),
}

/// Browsing state for a single interactive session.
///
/// `filtered` is always the subsequence of `entries` whose names contain the
/// search term (case-insensitively), and `selected` always indexes into
/// `filtered`, or is 0 when it is empty.
pub struct Navigator<R = FsReader> {
    reader: R,
    current_path: PathBuf,
    entries: Vec<Entry>,
    filtered: Vec<Entry>,
    selected: usize,
    search_active: bool,
    search_term: String,
}

impl Navigator<FsReader> {
    pub fn new(start: impl AsRef<Path>) -> Result<Self> {
        Self::with_reader(start, FsReader)
    }
}

impl<R: DirectoryReader> Navigator<R> {
    /// Resolves `start` to an absolute path. Nothing is listed until
    /// [`Navigator::scan`] is called.
    pub fn with_reader(start: impl AsRef<Path>, reader: R) -> Result<Self> {
        let current_path = path::resolve_absolute(start.as_ref())?;
        Ok(Self {
            reader,
            current_path,
            entries: Vec::new(),
            filtered: Vec::new(),
            selected: 0,
            search_active: false,
            search_term: String::new(),
        })
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Entries visible under the current search term, in listing order.
    pub fn entries(&self) -> &[Entry] {
        &self.filtered
    }

    /// Every entry of the last successful scan, ignoring the search term.
    pub fn all_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.filtered.get(self.selected)
    }

    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Re-lists the current directory.
    ///
    /// A permission error leaves the navigator untouched. Any other failure
    /// at a filesystem root moves to the home directory and tries once more,
    /// starting the selection over at the top.
    pub fn scan(&mut self) -> Result<()> {
        self.scan_inner(true)
    }

    fn scan_inner(&mut self, allow_home_fallback: bool) -> Result<()> {
        let children = match self.reader.list_children(&self.current_path) {
            Ok(children) => children,
            Err(ReadDirError::PermissionDenied) => {
                return Err(NavigatorError::PermissionDenied {
                    path: self.current_path.clone(),
                });
            }
            Err(source) => {
                if allow_home_fallback
                    && path::is_root(&self.current_path)
                    && let Some(home) = self.reader.home_dir()
                {
                    warn!(
                        root = %self.current_path.display(),
                        home = %home.display(),
                        error = %source,
                        "cannot list filesystem root; falling back to home directory"
                    );
                    let root = std::mem::replace(&mut self.current_path, home);
                    let selected = std::mem::replace(&mut self.selected, 0);
                    let fallback = self.scan_inner(false);
                    if fallback.is_err() {
                        self.current_path = root;
                        self.selected = selected;
                    }
                    return fallback;
                }
                return Err(NavigatorError::Scan {
                    path: self.current_path.clone(),
                    source,
                });
            }
        };

        let mut entries = Vec::with_capacity(children.len() + 1);
        if let Some(parent) = self.current_path.parent() {
            entries.push(Entry::parent_link(parent.to_path_buf()));
        }
        entries.extend(
            children
                .into_iter()
                .map(|child| Entry::child(&self.current_path, &child.file_name, child.is_dir)),
        );
        entries.sort_by(Entry::listing_order);
        debug!(
            path = %self.current_path.display(),
            entries = entries.len(),
            "scanned directory"
        );

        self.entries = entries;
        self.refilter();
        Ok(())
    }

    /// Moves the cursor by `delta` rows, stopping at either end of the list.
    pub fn move_selection(&mut self, delta: isize) {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            self.selected = 0;
            return;
        };
        let step = delta.unsigned_abs();
        let next = if delta < 0 {
            self.selected.saturating_sub(step)
        } else {
            self.selected.saturating_add(step)
        };
        self.selected = next.min(last);
    }

    /// Descends into the selected directory, or reports where a terminal
    /// should be opened for the selected file.
    ///
    /// If the new directory cannot be listed the error is returned and the
    /// navigator stays in the directory it was showing.
    pub fn open_selected(&mut self) -> Result<OpenOutcome> {
        let Some(entry) = self.selected_entry() else {
            return Ok(OpenOutcome::NoSelection);
        };
        if !entry.is_dir {
            return Ok(OpenOutcome::LaunchTerminal(entry.working_dir()));
        }

        let target = entry.path.clone();
        let previous_path = std::mem::replace(&mut self.current_path, target);
        let previous_selected = std::mem::replace(&mut self.selected, 0);
        let previous_search_active = std::mem::replace(&mut self.search_active, false);
        let previous_search_term = std::mem::take(&mut self.search_term);

        match self.scan() {
            Ok(()) => Ok(OpenOutcome::Descended),
            Err(err) => {
                // A failed scan leaves `entries` alone, so restoring these
                // brings back the exact previous view.
                self.current_path = previous_path;
                self.selected = previous_selected;
                self.search_active = previous_search_active;
                self.search_term = previous_search_term;
                Err(err)
            }
        }
    }

    /// Directory a new terminal should start in for the current selection.
    pub fn open_selected_in_terminal(&self) -> Option<PathBuf> {
        self.selected_entry().map(Entry::working_dir)
    }

    pub fn toggle_search(&mut self) {
        self.search_active = !self.search_active;
        if !self.search_active {
            self.search_term.clear();
            self.refilter();
        }
    }

    /// Replaces the search term and refilters. Ignored outside search mode;
    /// returns whether the term was applied.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        if !self.search_active {
            debug!("ignoring search term update while search is inactive");
            return false;
        }
        self.search_term = term.into();
        self.refilter();
        true
    }

    fn refilter(&mut self) {
        self.filtered = if self.search_term.is_empty() {
            self.entries.clone()
        } else {
            let needle = self.search_term.to_lowercase();
            self.entries
                .iter()
                .filter(|entry| entry.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
        self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
    }
}
