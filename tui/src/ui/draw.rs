use ratatui::{
    widgets::{Block, Clear},
    Frame,
};

use heart_failure_predictor::{model::Model, scaler::Scaler, FEATURES};

use crate::state::form::FormState;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw<S: Scaler, M: Model>(f: &mut Frame, form: &FormState<'_, S, M>) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = layout::centered_rect(70, 80, area);
    let (title_area, fields_area, buttons_area, hints_area) = layout::vertical(outer);

    f.render_widget(widgets::title(), title_area);

    for (i, (feature, row)) in FEATURES.iter().zip(layout::rows(fields_area)).enumerate() {
        let (label_area, entry_area) = layout::field(row);
        let focused = form.focus() == i && form.modal().is_none();
        let flagged = form.flagged() == Some(i);

        f.render_widget(widgets::label(feature), label_area);
        f.render_widget(widgets::entry(form.field(i), focused, flagged), entry_area);
    }

    let (predict_area, clear_area) = layout::buttons(buttons_area);
    f.render_widget(widgets::button("🔍 Predict", "F5"), predict_area);
    f.render_widget(widgets::button("🧹 Clear", "F6"), clear_area);

    f.render_widget(widgets::hints(), hints_area);

    if let Some(modal) = form.modal() {
        let popup = layout::centered_rect(50, 30, area);
        f.render_widget(Clear, popup);
        f.render_widget(widgets::modal(modal), popup);
    }
}
