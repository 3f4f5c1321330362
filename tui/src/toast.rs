use std::cell::RefCell;
use std::time::Duration;
use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::render::renderable::Renderable;

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Single transient message shown in place of the status line.
#[derive(Default)]
pub(crate) struct Toast {
    entry: RefCell<Option<ToastEntry>>,
}

struct ToastEntry {
    message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            entry: RefCell::new(None),
        }
    }

    /// Replaces any message currently shown.
    pub fn show(&self, message: impl Into<String>) {
        self.entry.replace(Some(ToastEntry {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        }));
    }

    pub fn message(&self) -> Option<String> {
        self.prune_expired();
        self.entry.borrow().as_ref().map(|entry| entry.message.clone())
    }

    /// Time until the current message disappears.
    pub fn next_expiry(&self) -> Option<Duration> {
        self.entry
            .borrow()
            .as_ref()
            .map(|entry| entry.expires_at.saturating_duration_since(Instant::now()))
    }

    fn prune_expired(&self) {
        let expired = matches!(
            self.entry.borrow().as_ref(),
            Some(entry) if entry.expires_at <= Instant::now()
        );
        if expired {
            self.entry.replace(None);
        }
    }
}

impl Renderable for Toast {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.message() else {
            return;
        };
        if area.is_empty() {
            return;
        }
        Line::from(message)
            .style(Style::default().fg(Color::Yellow))
            .render(Rect::new(area.x, area.y, area.width, 1), buf);
    }

    fn desired_height(&self, _width: u16) -> u16 {
        u16::from(self.next_expiry().is_some())
    }
}
