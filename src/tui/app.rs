use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use super::action::Action;
use super::error::AppError;
use super::screens::{ContactFormState, draw_contact_form};

/// Top-level application state: the contact form and the quit flag.
pub struct App {
    form: ContactFormState,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` with an empty contact form.
    pub fn new() -> Self {
        Self {
            form: ContactFormState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the contact form over the whole frame.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_contact_form(&self.form, frame, frame.area());
    }

    /// Handles a key event. Release events are ignored; everything else is
    /// delegated to the form, whose returned [`Action`] is applied here.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.form.handle_key(key) {
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Returns a reference to the contact form state.
    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
