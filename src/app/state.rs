#![allow(dead_code)]
//! Terminal-client interaction state layered over the game session.
//!
//! Holds only presentation concerns: which board slot the cursor is on and
//! which rack tile is selected. All game rules live in the engine.

use crate::game::{GameSession, BOARD_SIZE};

pub struct App {
    /// The engine; every rule routes through here.
    pub session: GameSession,
    /// Board slot the cursor is on.
    pub cursor: usize,
    /// Rack position of the tile selected for placement.
    pub selected: usize,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: 0,
            selected: 0,
            should_quit: false,
        }
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn on_right(&mut self) {
        if self.cursor + 1 < BOARD_SIZE {
            self.cursor += 1;
        }
    }

    pub fn on_prev_tile(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn on_next_tile(&mut self) {
        if self.selected + 1 < self.session.rack().len() {
            self.selected += 1;
        }
    }

    /// Place the selected rack tile at the cursor slot. Rejections already
    /// left their message (or deliberate silence) on the session.
    pub fn on_place(&mut self) {
        let _ = self.session.attempt_place(self.selected, self.cursor);
        self.clamp_selected();
    }

    pub fn on_submit(&mut self) {
        let _ = self.session.submit();
        self.clamp_selected();
    }

    pub fn on_reset(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.selected = 0;
    }

    /// Keep the selection on a real rack tile after the rack shrinks.
    fn clamp_selected(&mut self) {
        let len = self.session.rack().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
