//! Event handling for the TUI.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use projectboard_store::ProjectStore;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::ui;

/// Result type for TUI operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the board TUI against the given store.
pub fn run(store: &ProjectStore) -> Result<()> {
    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Create app
    let mut app = App::new(store);

    // Run event loop
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Pick up board changes before drawing
        app.drain_updates();

        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for events with timeout
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Handle Ctrl+C to quit
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    app.should_quit = true;
                } else if app.alert.is_some() {
                    // Alert blocks the form until acknowledged
                    app.dismiss_alert();
                } else {
                    match key.code {
                        KeyCode::Enter => app.submit(),
                        KeyCode::Tab => app.focus_next(),
                        KeyCode::BackTab => app.focus_prev(),
                        KeyCode::Down => app.focus_next(),
                        KeyCode::Up => app.focus_prev(),
                        KeyCode::Char(c) => app.enter_char(c),
                        KeyCode::Backspace => app.delete_char(),
                        KeyCode::Left => app.move_cursor_left(),
                        KeyCode::Right => app.move_cursor_right(),
                        KeyCode::Home => app.move_cursor_home(),
                        KeyCode::End => app.move_cursor_end(),
                        KeyCode::Esc => app.should_quit = true,
                        _ => {}
                    }
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
