use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use nav_core::Navigator;
use nav_core::NavigatorError;
use nav_core::OpenOutcome;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::entry_list::EntryList;
use crate::launcher::TerminalSpawner;
use crate::render::renderable::Renderable;
use crate::render::virtual_list::VirtualListState;
use crate::status_line::StatusLine;
use crate::toast::Toast;
use crate::tui::Tui;

/// How long to block on input when nothing on screen is time-sensitive.
const IDLE_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppControl {
    Continue,
    Exit,
}

pub(crate) struct App {
    navigator: Navigator,
    spawner: Box<dyn TerminalSpawner>,
    list_state: VirtualListState,
    /// Where the entry list was drawn last frame; sizes page up/down.
    list_area: Rect,
    toast: Toast,
}

impl App {
    pub fn new(navigator: Navigator, spawner: Box<dyn TerminalSpawner>) -> Self {
        Self {
            navigator,
            spawner,
            list_state: VirtualListState::new(),
            list_area: Rect::default(),
            toast: Toast::new(),
        }
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            tui.draw(|frame| {
                let area = frame.area();
                self.render(area, frame.buffer_mut());
                if let Some(position) = self.cursor_pos(area) {
                    frame.set_cursor_position(position);
                }
            })?;

            let timeout = self.toast.next_expiry().unwrap_or(IDLE_POLL_INTERVAL);
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    if self.handle_key_event(key_event) == AppControl::Exit {
                        return Ok(());
                    }
                }
                Event::Paste(pasted) => self.handle_paste(&pasted),
                // Resizes and everything else just redraw.
                _ => {}
            }
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> AppControl {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return AppControl::Exit;
        }
        if self.handle_navigation_key(key_event) {
            return AppControl::Continue;
        }
        if self.navigator.is_searching() {
            self.handle_search_key(key_event);
            AppControl::Continue
        } else {
            self.handle_browse_key(key_event)
        }
    }

    /// Keys that behave the same while browsing and searching.
    fn handle_navigation_key(&mut self, key_event: KeyEvent) -> bool {
        let page = VirtualListState::page_step(self.list_area);
        let page = isize::try_from(page).unwrap_or(isize::MAX);
        match key_event.code {
            KeyCode::Up => self.navigator.move_selection(-1),
            KeyCode::Down => self.navigator.move_selection(1),
            KeyCode::PageUp => self.navigator.move_selection(-page),
            KeyCode::PageDown => self.navigator.move_selection(page),
            KeyCode::Home => self.navigator.move_selection(isize::MIN),
            KeyCode::End => self.navigator.move_selection(isize::MAX),
            KeyCode::Enter => self.open_selected(),
            _ => return false,
        }
        true
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) -> AppControl {
        match key_event.code {
            KeyCode::Char('q') => return AppControl::Exit,
            KeyCode::Char('/') => self.navigator.toggle_search(),
            KeyCode::Char('o') => {
                if let Some(dir) = self.navigator.open_selected_in_terminal() {
                    self.launch_terminal(&dir);
                }
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.navigator.toggle_search(),
            KeyCode::Backspace => {
                let mut term = self.navigator.search_term().to_string();
                if term.pop().is_some() {
                    self.navigator.set_search_term(term);
                }
            }
            KeyCode::Char(c)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut term = self.navigator.search_term().to_string();
                term.push(c);
                self.navigator.set_search_term(term);
            }
            _ => {}
        }
    }

    /// Appends pasted text to the search term. The term is a single line, so
    /// line breaks and other control characters are dropped.
    pub fn handle_paste(&mut self, pasted: &str) {
        if !self.navigator.is_searching() {
            return;
        }
        let mut term = self.navigator.search_term().to_string();
        term.extend(pasted.chars().filter(|c| !c.is_control()));
        self.navigator.set_search_term(term);
    }

    fn open_selected(&mut self) {
        match self.navigator.open_selected() {
            Ok(OpenOutcome::NoSelection) => {}
            Ok(OpenOutcome::Descended) => {
                self.list_state = VirtualListState::new();
            }
            Ok(OpenOutcome::LaunchTerminal(dir)) => self.launch_terminal(&dir),
            Err(err) => self.report_error(&err),
        }
    }

    fn launch_terminal(&mut self, dir: &Path) {
        match self.spawner.spawn(dir) {
            Ok(()) => self
                .toast
                .show(format!("Opened terminal in {}", dir.display())),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), "failed to open terminal: {err}");
                self.toast.show(format!("Error opening terminal: {err}"));
            }
        }
    }

    fn report_error(&mut self, err: &NavigatorError) {
        tracing::warn!("{err}");
        self.toast.show(err.to_string());
    }

    fn status_line(&self) -> StatusLine {
        if self.navigator.is_searching() {
            StatusLine::searching(self.navigator.search_term())
        } else {
            StatusLine::browsing(self.navigator.entries().len())
        }
    }

    fn layout(&self, area: Rect) -> [Rect; 4] {
        let status_height = self
            .toast
            .desired_height(area.width)
            .max(self.status_line().desired_height(area.width));
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(status_height),
        ])
        .areas(area)
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [path_area, _gap, list_area, status_area] = self.layout(area);
        self.list_area = list_area;

        Line::from(self.navigator.current_path().display().to_string()).render(path_area, buf);

        let list = EntryList::new(self.navigator.entries());
        self.list_state
            .render(&list, self.navigator.selected_index(), list_area, buf);

        // A pending toast takes the status bar's place until it expires.
        if self.toast.message().is_some() {
            self.toast.render(status_area, buf);
        } else {
            self.status_line().render(status_area, buf);
        }
    }

    fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.navigator.is_searching() || self.toast.message().is_some() {
            return None;
        }
        let [.., status_area] = self.layout(area);
        Some((self.status_line().cursor_x(status_area), status_area.y))
    }
}
