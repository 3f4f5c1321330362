use nav_core::Entry;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::render::virtual_list::VirtualListAdapter;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// Tree-style view over the navigator's visible entries.
pub(crate) struct EntryList<'a> {
    entries: &'a [Entry],
}

impl<'a> EntryList<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    pub fn row_text(&self, index: usize) -> String {
        let prefix = if index + 1 == self.entries.len() {
            LAST_BRANCH
        } else {
            BRANCH
        };
        format!("{prefix}{}", display_name(&self.entries[index]))
    }
}

/// Directories get a trailing slash; the parent link already has one.
pub(crate) fn display_name(entry: &Entry) -> String {
    if entry.is_dir && !entry.is_parent_link() {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}

impl VirtualListAdapter for EntryList<'_> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn render_row(&self, index: usize, area: Rect, buf: &mut Buffer, selected: bool) {
        let style = if selected {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default()
        };
        Line::styled(self.row_text(index), style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::path::PathBuf;

    #[test]
    fn rows_use_tree_prefixes_and_dir_suffixes() {
        let dir = Path::new("/tmp/x");
        let entries = vec![
            Entry::parent_link(PathBuf::from("/tmp")),
            Entry::child(dir, "src", true),
            Entry::child(dir, "Cargo.toml", false),
        ];
        let list = EntryList::new(&entries);
        let rows: Vec<String> = (0..list.len()).map(|i| list.row_text(i)).collect();
        assert_eq!(rows, vec!["├── ../", "├── src/", "└── Cargo.toml"]);
    }
}
