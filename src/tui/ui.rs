use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::constants::UI_REFRESH_INTERVAL_MS;
use crate::tui::render::render_ui;
use crate::tui::App;
use crate::utils::FolioError;

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("❌ Folio's portfolio view requires an interactive terminal.");
        eprintln!("   Use `folio ask \"...\"` or `folio profile` from scripts instead.");
        return Err(FolioError::UIError("No interactive terminal available".to_string()).into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            // Hand the runtime a chance to drive the chat request
            tokio::time::sleep(Duration::from_millis(UI_REFRESH_INTERVAL_MS)).await;
        }

        app.tick();
    }

    Ok(())
}
