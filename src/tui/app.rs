use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::UIConfig;
use crate::chat::{ChatWidget, RejectReason};
use crate::constants::{UI_PAGE_LINES, UI_SCROLL_LINES};
use crate::sections::{render_section, LineKind, PortfolioData, Section, SectionLine};

/// Application state
pub struct App {
    /// Chat pane and its conversation
    pub widget: ChatWidget,
    /// Portfolio content fetched at startup
    pub data: PortfolioData,
    /// Is the app running?
    pub running: bool,
    /// Scroll offset of the section view, in lines from the top
    pub scroll_offset: u16,
    /// Show the portfolio sections
    pub show_sections: bool,
    /// Show the welcome text in an empty chat
    pub show_welcome: bool,
    /// API base URL for display
    pub api_url: String,
    /// Status message
    pub status_message: Option<String>,
    section_lines: Vec<SectionLine>,
}

impl App {
    /// Create a new app instance
    pub fn new(widget: ChatWidget, data: PortfolioData, ui: &UIConfig, api_url: String) -> Self {
        let section_lines = Section::all()
            .iter()
            .flat_map(|section| {
                let mut lines = render_section(*section, &data);
                lines.push(SectionLine {
                    kind: LineKind::Blank,
                    text: String::new(),
                });
                lines
            })
            .collect();

        Self {
            widget,
            data,
            running: true,
            scroll_offset: 0,
            show_sections: ui.show_sections,
            show_welcome: ui.show_welcome,
            api_url,
            status_message: None,
            section_lines,
        }
    }

    /// All sections, rendered once
    pub fn section_lines(&self) -> &[SectionLine] {
        &self.section_lines
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Scroll the section view towards the top
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll the section view towards the bottom
    pub fn scroll_down(&mut self, amount: u16) {
        let max_scroll = u16::try_from(self.section_lines.len().saturating_sub(1))
            .unwrap_or(u16::MAX);
        self.scroll_offset = self.scroll_offset.saturating_add(amount).min(max_scroll);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Fold finished chat requests into the conversation
    pub fn tick(&mut self) {
        if self.widget.poll() > 0 {
            self.clear_status();
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Tab => self.widget.toggle(),
            KeyCode::PageUp => self.scroll_up(UI_PAGE_LINES),
            KeyCode::PageDown => self.scroll_down(UI_PAGE_LINES),
            _ if self.widget.is_open() => self.handle_chat_key(key),
            _ => self.handle_browse_key(key),
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.widget.close(),
            // Input is locked until the pending reply lands
            KeyCode::Enter | KeyCode::Backspace | KeyCode::Char(_) if self.widget.is_typing() => {
                self.set_status("Waiting for the assistant to answer...")
            }
            KeyCode::Enter => match self.widget.submit() {
                Ok(_) => self.clear_status(),
                Err(RejectReason::InFlight) => {
                    self.set_status("Waiting for the assistant to answer...")
                }
                Err(RejectReason::Empty) => {}
            },
            KeyCode::Backspace => self.widget.pop_char(),
            KeyCode::Char(c) => self.widget.push_char(c),
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') | KeyCode::Enter => self.widget.open(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Char(' ') => self.scroll_down(UI_SCROLL_LINES),
            _ => {}
        }
    }
}
