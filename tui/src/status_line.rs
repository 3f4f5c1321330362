use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::render::renderable::Renderable;

const NORMAL_HINTS: &str = "↑↓ navigate • Enter open • o open in terminal • q quit • / search";

/// Bottom line: the search prompt while searching, key hints otherwise.
#[derive(Clone, Debug)]
pub(crate) struct StatusLine {
    line: Line<'static>,
}

impl StatusLine {
    pub fn searching(term: &str) -> Self {
        Self {
            line: Line::from(format!("Search: {term}")),
        }
    }

    pub fn browsing(item_count: usize) -> Self {
        Self {
            line: Line::from(format!("[{item_count} items] • {NORMAL_HINTS}")),
        }
    }

    /// Column just past the search term, where the text cursor belongs.
    pub fn cursor_x(&self, area: Rect) -> u16 {
        let width = u16::try_from(self.line.width()).unwrap_or(u16::MAX);
        area.x.saturating_add(width).min(area.right().saturating_sub(1))
    }
}

impl Renderable for StatusLine {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.line
            .clone()
            .style(Style::default().fg(Color::White))
            .render(Rect::new(area.x, area.y, area.width, 1), buf);
    }

    fn desired_height(&self, _width: u16) -> u16 {
        1
    }
}
