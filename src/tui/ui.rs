//! UI rendering using ratatui
//!
//! Single-screen layout: header with bag count, the board row with its
//! bonus labels, the rack, the score/error lines, and a key legend.

use crate::app::App;
use crate::game::Bonus;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render the whole game screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title, bag count
            Constraint::Length(4), // Board row + bonus labels
            Constraint::Length(3), // Rack
            Constraint::Length(3), // Scores, error, slot hint
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    render_header(frame, layout[0], app);
    render_board(frame, layout[1], app);
    render_rack(frame, layout[2], app);
    render_status(frame, layout[3], app);
    render_footer(frame, layout[5]);
}

/// Render the header: logo left, bag count right
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(10),    // Bag count
        ])
        .split(inner);

    let logo = Paragraph::new("TILE ROW")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let bag = Paragraph::new(format!("Bag: {} tiles", app.session.bag_remaining()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(bag, header_layout[1]);
}

/// Render the 15 slots with their bonus labels, cursor highlighted
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.session.board();

    let mut slot_spans: Vec<Span> = Vec::new();
    let mut label_spans: Vec<Span> = Vec::new();

    for (i, slot) in board.slots().iter().enumerate() {
        let cell = match slot.tile() {
            Some(tile) => format!("[{}]", tile.letter),
            None => "[ ]".to_string(),
        };

        let mut style = match slot.bonus() {
            Bonus::DoubleWord | Bonus::TripleWord => Style::default().fg(Color::Magenta),
            Bonus::DoubleLetter | Bonus::TripleLetter => Style::default().fg(Color::Cyan),
            Bonus::None => Style::default().fg(Color::White),
        };
        if i == app.cursor {
            style = style.bg(Color::DarkGray).bold();
        }

        slot_spans.push(Span::styled(cell, style));
        slot_spans.push(Span::raw(" "));

        let short = match slot.bonus() {
            Bonus::DoubleWord => "DW",
            Bonus::TripleWord => "TW",
            Bonus::DoubleLetter => "DL",
            Bonus::TripleLetter => "TL",
            Bonus::None => "",
        };
        label_spans.push(Span::styled(
            format!("{:<4}", short),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![Line::from(slot_spans), Line::from(label_spans)];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Board"),
    );
    frame.render_widget(widget, area);
}

/// Render the rack with the selected tile highlighted
fn render_rack(frame: &mut Frame, area: Rect, app: &App) {
    let rack = app.session.rack();

    let line = if rack.is_empty() {
        Line::from(Span::styled(
            "(rack empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans: Vec<Span> = Vec::new();
        for (i, tile) in rack.iter().enumerate() {
            let style = if i == app.selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!("[{} {}]", tile.letter, tile.value), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Rack"),
    );
    frame.render_widget(widget, area);
}

/// Render live/total score, the transient error, and the cursor slot hint
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scores
            Constraint::Length(1), // Error
            Constraint::Length(1), // Slot hint
        ])
        .split(area);

    let scores = Line::from(vec![
        Span::styled(
            format!("Score: {}", app.session.live_score()),
            Style::default().fg(Color::Magenta).bold(),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Total Score: {}", app.session.total_score()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(scores), status_layout[0]);

    let error = Paragraph::new(app.session.error_message().unwrap_or(""))
        .style(Style::default().fg(Color::Red));
    frame.render_widget(error, status_layout[1]);

    let bonus = app.session.board().bonus(app.cursor);
    let hint = if bonus.label().is_empty() {
        format!("Slot {}", app.cursor)
    } else {
        format!("Slot {} ({})", app.cursor, bonus.label())
    };
    let hint_widget = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint_widget, status_layout[2]);
}

/// Render the key legend
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer =
        Paragraph::new("←→ Slot  ↑↓ Tile  Space Place  Enter Submit  R Reset  Esc Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
