use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub(crate) trait Renderable {
    fn render(&self, area: Rect, buf: &mut Buffer);
    fn desired_height(&self, width: u16) -> u16;
}
