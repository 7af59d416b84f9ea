//! Interactive dashboard.
//!
//! The renderer owns the navigation state and the scroll offset. Every frame
//! re-resolves the current page, so a key press is all it takes to move
//! between pages and views.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Margin},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use subprime_content::ContentTables;
use subprime_engine::NavigationState;
use subprime_types::Page;

use crate::presentation::presenters::present_page;
use crate::presentation::views::tui::{
    HeaderView, PageBody, PageBodyView, SidebarView, StatusBarView,
};

const SIDEBAR_WIDTH: u16 = 30;
const HEADER_HEIGHT: u16 = 4;
const PAGE_STEP: u16 = 10;

pub struct TuiRenderer {
    tables: ContentTables,
    state: NavigationState,

    /// UI State: page body scroll offset
    scroll: u16,

    /// Largest useful scroll offset, known after the last draw
    max_scroll: u16,

    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(tables: ContentTables, state: NavigationState) -> Self {
        Self {
            tables,
            state,
            scroll: 0,
            max_scroll: u16::MAX,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        tracing::debug!(page = %self.state.page(), "dashboard started");

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let before = (self.state.page(), self.state.sub());
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.next_page(),
            KeyCode::Up | KeyCode::Char('k') => self.state.previous_page(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.next_sub(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.previous_sub(),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = c as usize - '1' as usize;
                if let Some(page) = Page::ALL.get(idx) {
                    self.state.go_to(*page);
                }
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll = self.scroll.saturating_add(PAGE_STEP).min(self.max_scroll);
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            KeyCode::Home => {
                self.scroll = 0;
            }
            KeyCode::End => {
                self.scroll = self.max_scroll;
            }
            _ => {}
        }

        if before != (self.state.page(), self.state.sub()) {
            tracing::debug!(page = %self.state.page(), sub = ?self.state.sub(), "navigated");
            self.scroll = 0;
            self.max_scroll = u16::MAX;
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let model = match present_page(&self.tables, &self.state) {
            Ok(model) => model,
            Err(err) => {
                let error = Paragraph::new(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                ))
                .block(Block::default().title("Error").borders(Borders::ALL));
                f.render_widget(error, size);
                return;
            }
        };

        // [ Sidebar | Header + Body ] over a one-line status bar
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(size);
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(main_area);
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .areas(content_area);

        let body_block = Block::default().borders(Borders::ALL);
        let body_inner = body_block.inner(body_area).inner(Margin::new(1, 0));
        let body = PageBody::new(&model, body_inner.width);

        self.max_scroll = body.max_scroll(body_inner.height);
        self.scroll = self.scroll.min(self.max_scroll);

        f.render_widget(SidebarView::new(&model), sidebar_area);
        f.render_widget(HeaderView::new(&model), header_area);
        f.render_widget(body_block, body_area);
        f.render_widget(PageBodyView::new(&body, self.scroll), body_inner);
        f.render_widget(
            StatusBarView::new(model.locale, self.scroll, self.max_scroll),
            status_area,
        );
    }
}
