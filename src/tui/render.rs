use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::chat::{ChatWidget, Role};
use crate::constants::{CHAT_PLACEHOLDER, CHAT_SUBTITLE, CHAT_TITLE, CHAT_WELCOME_LINES};
use crate::sections::{LineKind, Section, SectionLine};
use crate::tui::App;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let chat_open = app.widget.is_open();
    match (chat_open, app.show_sections) {
        (true, true) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);
            render_sections(frame, columns[0], app);
            render_chat(frame, columns[1], &app.widget, app.show_welcome);
        }
        (true, false) => render_chat(frame, chunks[1], &app.widget, app.show_welcome),
        (false, _) => render_sections(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let name = app
        .data
        .profile
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("Portfolio");

    let nav = Section::all()
        .iter()
        .map(Section::title)
        .collect::<Vec<_>>()
        .join(" · ");

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("💼 ", Style::default().fg(Color::Cyan)),
            Span::styled(
                name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&app.api_url, Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(nav, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn section_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Subheading => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineKind::Body | LineKind::Blank => Style::default(),
        LineKind::Meta => Style::default().fg(Color::DarkGray),
        LineKind::Tag => Style::default().fg(Color::Yellow),
    }
}

fn section_line(line: &SectionLine) -> Line<'_> {
    Line::from(Span::styled(line.text.as_str(), section_style(line.kind)))
}

fn render_sections(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app.section_lines().iter().map(section_line).collect();

    let sections = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));

    frame.render_widget(sections, area);
}

/// Rows a set of lines occupies once wrapped to `width` columns, capped at
/// `u16::MAX` since that is as far as a paragraph can scroll
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .fold(0, usize::saturating_add);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_chat(frame: &mut Frame, area: Rect, widget: &ChatWidget, show_welcome: bool) {
    let block = Block::default()
        .title(format!(" {} ", CHAT_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Min(3),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(CHAT_SUBTITLE, Style::default().fg(Color::Gray))),
        rows[0],
    );

    let mut lines: Vec<Line> = Vec::new();
    let store = widget.store();

    if store.is_empty() && show_welcome {
        for text in CHAT_WELCOME_LINES {
            lines.push(Line::from(Span::styled(
                *text,
                Style::default().fg(Color::Gray),
            )));
        }
    }

    for msg in store.messages() {
        let color = match msg.role() {
            Role::User => Color::Blue,
            Role::Assistant => Color::Green,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", msg.role().label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                msg.created_at().format("%H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for line in msg.content().lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::from(""));
    }

    if widget.is_typing() {
        lines.push(Line::from(Span::styled(
            "● ● ●",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::SLOW_BLINK),
        )));
    }

    // Keep the newest message in view
    let height = wrapped_height(&lines, rows[1].width);
    let scroll = height.saturating_sub(rows[1].height);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        rows[1],
    );

    render_input(frame, rows[2], widget);
}

fn render_input(frame: &mut Frame, area: Rect, widget: &ChatWidget) {
    let (title, border) = if widget.is_typing() {
        (" Waiting for reply ", Color::DarkGray)
    } else if widget.can_submit() {
        (" Enter to send ", Color::Cyan)
    } else {
        (" Message ", Color::DarkGray)
    };

    let content = if widget.input().is_empty() {
        Span::styled(CHAT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(widget.input())
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(input, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_message {
        Some(message) => Span::styled(message.as_str(), Style::default().fg(Color::Yellow)),
        None if app.widget.is_open() => Span::styled(
            "Tab/Esc: hide chat | Enter: send | PgUp/PgDn: scroll | Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ),
        None => Span::styled(
            "Tab/c: open chat | ↑↓ PgUp/PgDn: scroll | q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockChatBackend;
    use crate::app::UIConfig;
    use crate::sections::PortfolioData;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(open: bool) -> App {
        let mut widget = ChatWidget::new(Arc::new(MockChatBackend::new()), false);
        if open {
            widget.open();
        }
        App::new(
            widget,
            PortfolioData::default(),
            &UIConfig::default(),
            "http://test/api".to_string(),
        )
    }

    #[test]
    fn test_closed_chat_shows_sections_only() {
        let screen = draw(&app(false));
        assert!(screen.contains("Full Stack Developer"));
        assert!(!screen.contains(CHAT_TITLE));
        assert!(screen.contains("q: quit"));
        assert!(screen.contains("Home · Experience · Projects · Skills · Contact"));
    }

    #[test]
    fn test_open_chat_shows_welcome_and_placeholder() {
        let screen = draw(&app(true));
        assert!(screen.contains(CHAT_TITLE));
        assert!(screen.contains("Ask me about:"));
        assert!(screen.contains(CHAT_PLACEHOLDER));
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("abcdef"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 3), 2 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 10), 3);
    }

    #[test]
    fn test_wrapped_height_saturates_on_long_transcript() {
        let lines: Vec<Line> = (0..70_000).map(|_| Line::from("x")).collect();
        assert_eq!(wrapped_height(&lines, 80), u16::MAX);

        let long = vec![Line::from("y".repeat(200_000))];
        assert_eq!(wrapped_height(&long, 1), u16::MAX);
    }
}
