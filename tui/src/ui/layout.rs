use ratatui::layout::{Constraint, Direction, Layout, Rect};

use heart_failure_predictor::FEATURE_COUNT;

/// Height of a single labelled input row.
const ROW_HEIGHT: u16 = 3;

/// Computes the main form regions.
///
/// # Returns
/// (title, fields, buttons, hints)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // title
            Constraint::Length(ROW_HEIGHT * FEATURE_COUNT as u16), // fields
            Constraint::Length(1),                                // spacer
            Constraint::Length(3),                                // buttons
            Constraint::Min(0),                                   // spacer
            Constraint::Length(1),                                // hints
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[3], chunks[5])
}

/// Splits the fields region into one row per feature.
pub fn rows(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ROW_HEIGHT); FEATURE_COUNT])
        .split(area)
        .to_vec()
}

/// Splits a field row into (label, input).
pub fn field(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(10)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the buttons region into (predict, clear).
pub fn buttons(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(30),
            Constraint::Percentage(10),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
        ])
        .split(area);

    (cols[1], cols[3])
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
