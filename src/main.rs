//! TILE ROW - single-row word-tile placement game
//!
//! Draw seven tiles, lay them in one unbroken run, cash in the bonus slots.

mod app;
mod game;
mod tui;

use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use tui::Tui;

fn main() -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut app = App::new();

    // Main event loop; every state transition is a key press, so blocking
    // reads are enough (no timers, no background work)
    loop {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => app.quit(),
                    KeyCode::Left => app.on_left(),
                    KeyCode::Right => app.on_right(),
                    KeyCode::Up => app.on_prev_tile(),
                    KeyCode::Down => app.on_next_tile(),
                    KeyCode::Char(' ') => app.on_place(),
                    KeyCode::Enter => app.on_submit(),
                    KeyCode::Char('r') | KeyCode::Char('R') => app.on_reset(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
