use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Rows drawn by [`VirtualListState`]. Every row is one line tall.
pub(crate) trait VirtualListAdapter {
    fn len(&self) -> usize;
    fn render_row(&self, index: usize, area: Rect, buf: &mut Buffer, selected: bool);
}

/// Scroll position of a list that only draws the rows that fit.
#[derive(Debug, Default)]
pub(crate) struct VirtualListState {
    first_visible: usize,
}

impl VirtualListState {
    pub fn new() -> Self {
        Self { first_visible: 0 }
    }

    /// Scrolls the minimum amount needed for `selected` to be on screen.
    pub fn ensure_visible(&mut self, len: usize, selected: usize, height: u16) {
        if height == 0 || len == 0 {
            self.first_visible = 0;
            return;
        }
        let height = usize::from(height);
        let selected = selected.min(len - 1);
        if selected < self.first_visible {
            self.first_visible = selected;
        } else if selected >= self.first_visible + height {
            self.first_visible = selected + 1 - height;
        }
        // Do not leave blank rows at the bottom when the list shrank.
        self.first_visible = self.first_visible.min(len.saturating_sub(height));
    }

    pub fn render<A: VirtualListAdapter>(
        &mut self,
        adapter: &A,
        selected: usize,
        area: Rect,
        buf: &mut Buffer,
    ) {
        self.ensure_visible(adapter.len(), selected, area.height);
        let mut y = area.y;
        let mut index = self.first_visible;
        while index < adapter.len() && y < area.bottom() {
            adapter.render_row(index, Rect::new(area.x, y, area.width, 1), buf, index == selected);
            y += 1;
            index += 1;
        }
        while y < area.bottom() {
            for x in area.x..area.right() {
                buf[(x, y)].reset();
            }
            y += 1;
        }
    }

    /// Rows moved by a page up/down.
    pub fn page_step(area: Rect) -> usize {
        usize::from(area.height).max(1)
    }
}
