use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use heart_failure_predictor::{
    model::Model, scaler::Scaler, PredictionResult, PredictorContext, RequestHandler,
    ValidationErr, FEATURE_COUNT,
};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

/// The dialog shown on top of the form once a request finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Prediction(PredictionResult),
    InputError(ValidationErr),
}

/// The form's presentation state wrapped around the request handler.
pub struct FormState<'ctx, S, M> {
    handler: RequestHandler<'ctx, S, M>,
    focus: usize,
    flagged: Option<usize>,
    modal: Option<Modal>,
}

impl<'ctx, S: Scaler, M: Model> FormState<'ctx, S, M> {
    pub fn new(context: &'ctx PredictorContext<S, M>) -> Self {
        Self {
            handler: RequestHandler::new(context),
            focus: 0,
            flagged: None,
            modal: None,
        }
    }

    pub fn field(&self, index: usize) -> &str {
        self.handler.field(index)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The field that failed the last validation, if any.
    pub fn flagged(&self) -> Option<usize> {
        self.flagged
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.modal.take().is_some() {
            self.handler.acknowledge();
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Char('p') if ctrl => self.predict(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::F(5) => self.predict(),
            KeyCode::F(6) => self.clear(),
            KeyCode::Enter if self.focus + 1 < FEATURE_COUNT => self.focus += 1,
            KeyCode::Enter => self.predict(),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FEATURE_COUNT,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FEATURE_COUNT - 1) % FEATURE_COUNT
            }
            KeyCode::Backspace => {
                if let Some(field) = self.handler.field_mut(self.focus) {
                    field.pop();
                }
            }
            KeyCode::Char(c) if !ctrl && is_numeric_char(c) => {
                if let Some(field) = self.handler.field_mut(self.focus) {
                    field.push(c);
                }
            }
            _ => {}
        }

        Action::None
    }

    fn predict(&mut self) {
        self.flagged = None;

        self.modal = Some(match self.handler.submit() {
            Ok(result) => Modal::Prediction(result),
            Err(e) => {
                self.flagged = Some(e.index());
                Modal::InputError(e)
            }
        });
    }

    fn clear(&mut self) {
        self.handler.clear();
        self.flagged = None;
        self.focus = 0;
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
