use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use heart_failure_predictor::Feature;

use crate::state::form::Modal;

use super::theme::Theme;

pub fn title<'a>() -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled("♥ Heart Failure Predictor", Theme::title())),
        Line::from(Span::styled(
            "survival outcome estimate from clinical data",
            Theme::muted(),
        )),
    ])
    .alignment(Alignment::Center)
}

pub fn label(feature: &Feature) -> Paragraph<'_> {
    // Pads down to the input's text line.
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(feature.label, Theme::label())),
    ])
}

pub fn entry(value: &str, focused: bool, flagged: bool) -> Paragraph<'_> {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("█", Theme::cursor()));
    }

    Paragraph::new(Line::from(spans))
        .style(Theme::entry(focused, flagged))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::entry_border(focused, flagged)),
        )
}

pub fn button<'a>(text: &'a str, key: &'a str) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(text, Theme::button()),
        Span::styled(format!("  [{key}]"), Theme::button()),
    ]))
    .alignment(Alignment::Center)
    .style(Theme::button())
    .block(Block::default().borders(Borders::ALL).border_style(Theme::button()))
}

pub fn hints<'a>() -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled("enter", Theme::key()),
        Span::styled("  next / predict    ", Theme::muted()),
        Span::styled("tab ↑↓", Theme::key()),
        Span::styled("  move    ", Theme::muted()),
        Span::styled("ctrl-p", Theme::key()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("ctrl-l", Theme::key()),
        Span::styled("  clear    ", Theme::muted()),
        Span::styled("esc", Theme::key()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center)
}

pub fn modal(modal: &Modal) -> Paragraph<'_> {
    let (title, border, body) = match modal {
        Modal::Prediction(result) => (" Prediction ", Theme::title(), result.to_string()),
        Modal::InputError(e) => (" Input Error ", Theme::error(), e.to_string()),
    };

    let mut lines: Vec<Line> = body.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("press any key", Theme::muted())));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Theme::base())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title)
                .title_style(border)
                .title_alignment(Alignment::Center),
        )
}
