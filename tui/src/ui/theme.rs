use ratatui::style::{Color, Modifier, Style};

/// Soft clinical palette.
///
/// Base aesthetic:
/// - navy titles on a light background
/// - light blue for the action buttons
/// - pale red for flagged inputs
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(244, 244, 249);
    pub const FG: Color = Color::Rgb(40, 40, 48);
    pub const FG_MUTED: Color = Color::Rgb(120, 120, 135);
    pub const TITLE: Color = Color::Rgb(55, 71, 133);

    // Accents
    pub const BUTTON: Color = Color::Rgb(168, 208, 230);
    pub const FOCUS: Color = Color::Rgb(137, 189, 211);
    pub const ENTRY_BG: Color = Color::Rgb(255, 255, 255);
    pub const FLAGGED_BG: Color = Color::Rgb(255, 230, 230);
    pub const ERROR: Color = Color::Rgb(190, 40, 40);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    /// Field labels.
    pub fn label() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// An input box, depending on whether it has focus or failed validation.
    pub fn entry(focused: bool, flagged: bool) -> Style {
        let bg = if flagged { Self::FLAGGED_BG } else { Self::ENTRY_BG };
        Style::default().fg(Self::FG).bg(bg).add_modifier(if focused {
            Modifier::BOLD
        } else {
            Modifier::empty()
        })
    }

    pub fn entry_border(focused: bool, flagged: bool) -> Style {
        match (focused, flagged) {
            (_, true) => Style::default().fg(Self::ERROR),
            (true, false) => Style::default().fg(Self::TITLE),
            (false, false) => Style::default().fg(Self::FG_MUTED),
        }
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::BUTTON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key() -> Style {
        Style::default().fg(Self::TITLE).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cursor() -> Style {
        Style::default().fg(Self::FOCUS)
    }
}
