use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use heart_failure_predictor::{model::Model, scaler::Scaler, PredictorContext};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    state::form::{Action, FormState},
    ui::draw,
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the prediction form until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run<S: Scaler, M: Model>(context: &PredictorContext<S, M>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut form = FormState::new(context);
    log::info!("form ready");

    loop {
        terminal.draw(|f| draw::draw(f, &form))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match form.handle_key(k) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    log::info!("form closed");
    terminal.show_cursor()?;
    Ok(())
}
