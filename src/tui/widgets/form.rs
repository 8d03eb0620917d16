//! Contact form input widget with live per-field validation.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, ValidationError, validate};

/// Rows each field occupies when drawn: a bordered input plus an error line.
const FIELD_ROWS: u16 = 4;

/// Total height [`draw_form`] needs for the full form.
pub const FORM_HEIGHT: u16 = FIELD_ROWS * 4;

/// A single input row bound to a [`Field`].
#[derive(Debug, Clone)]
pub struct Input {
    field: Field,
    value: String,
    error: Option<ValidationError>,
}

impl Input {
    fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            error: None,
        }
    }

    /// The field this input is bound to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Current text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current validation error, if any.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Re-evaluates this input's rule against its current value.
    fn revalidate(&mut self) {
        self.error = validate(self.field, &self.value).err();
    }
}

/// The contact inputs, one per [`Field`], with focus management.
///
/// Every edit re-validates the edited field immediately, so an error entry
/// never outlives the keystroke that satisfies the field's rule. Fields that
/// have not been touched carry no error until [`Form::validate_required`]
/// runs at submit time.
#[derive(Debug, Clone)]
pub struct Form {
    inputs: Vec<Input>,
    focus: usize,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates the form with all values empty and no errors. Focus starts on
    /// the first field.
    pub fn new() -> Self {
        Self {
            inputs: Field::all().iter().copied().map(Input::new).collect(),
            focus: 0,
        }
    }

    /// Returns the currently focused field.
    pub fn focused(&self) -> Field {
        self.inputs[self.focus].field
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Appends a character to the focused field and re-validates it.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.value.push(ch);
            input.revalidate();
        }
    }

    /// Deletes the last character of the focused field and re-validates it.
    pub fn delete_char(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.value.pop();
            input.revalidate();
        }
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: Field) -> &str {
        &self.input(field).value
    }

    /// Returns the current error recorded for `field`, if any.
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.input(field).error
    }

    /// Returns `true` if any field has an error recorded.
    pub fn has_errors(&self) -> bool {
        self.inputs.iter().any(|i| i.error.is_some())
    }

    /// Returns how many fields currently have an error recorded.
    pub fn error_count(&self) -> usize {
        self.inputs.iter().filter(|i| i.error.is_some()).count()
    }

    /// Re-validates every required field, surfacing all outstanding errors
    /// at once. Optional fields are left untouched.
    pub fn validate_required(&mut self) {
        for input in &mut self.inputs {
            if input.field.is_required() {
                input.revalidate();
            }
        }
    }

    /// Clears all values, errors, and focus back to the initial state.
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.value.clear();
            input.error = None;
        }
        self.focus = 0;
    }

    /// Returns the inputs in form order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    fn input(&self, field: Field) -> &Input {
        self.inputs
            .iter()
            .find(|i| i.field == field)
            .expect("form holds an input for every field")
    }
}

/// Renders the form: one bordered input per field with its label, a `*`
/// marker on required fields, and the error text on the line below when the
/// field's rule is unsatisfied.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .inputs()
        .iter()
        .flat_map(|_| [Constraint::Length(FIELD_ROWS - 1), Constraint::Length(1)])
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, input) in form.inputs().iter().enumerate() {
        let is_focused = input.field() == form.focused();

        let border_color = if input.error().is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let title = if input.field().is_required() {
            format!("{} *", input.field().label())
        } else {
            input.field().label().to_string()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(input.value())];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i * 2]);

        if let Some(err) = input.error() {
            let error_line =
                Paragraph::new(Span::styled(err.to_string(), Style::default().fg(Color::Red)));
            frame.render_widget(error_line, rows[i * 2 + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut Form, s: &str) {
        for ch in s.chars() {
            form.insert_char(ch);
        }
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_on_first_name() {
        let form = Form::new();
        assert_eq!(form.focused(), Field::FirstName);
    }

    #[test]
    fn focus_next_advances_in_form_order() {
        let mut form = Form::new();
        form.focus_next();
        assert_eq!(form.focused(), Field::LastName);
        form.focus_next();
        assert_eq!(form.focused(), Field::Email);
        form.focus_next();
        assert_eq!(form.focused(), Field::Message);
    }

    #[test]
    fn focus_next_wraps() {
        let mut form = Form::new();
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focused(), Field::FirstName);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = Form::new();
        form.focus_prev();
        assert_eq!(form.focused(), Field::Message);
    }

    // --- Editing and live validation ---

    #[test]
    fn insert_char_appends_to_focused_field_only() {
        let mut form = Form::new();
        form.insert_char('J');
        form.insert_char('o');
        assert_eq!(form.value(Field::FirstName), "Jo");
        assert_eq!(form.value(Field::LastName), "");
    }

    #[test]
    fn typed_value_reads_back_exactly() {
        let mut form = Form::new();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        type_into(&mut form, "Here is a message");
        assert_eq!(form.value(Field::Message), "Here is a message");
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = Form::new();
        type_into(&mut form, "ab");
        form.delete_char();
        assert_eq!(form.value(Field::FirstName), "a");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = Form::new();
        form.delete_char();
        assert_eq!(form.value(Field::FirstName), "");
    }

    #[test]
    fn short_first_name_errors_while_typing() {
        let mut form = Form::new();
        type_into(&mut form, "abcd");
        assert_eq!(form.error(Field::FirstName), Some(ValidationError::TooShort));
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn error_clears_once_rule_is_satisfied() {
        let mut form = Form::new();
        type_into(&mut form, "abcd");
        assert!(form.has_errors());
        form.insert_char('e');
        assert_eq!(form.error(Field::FirstName), None);
        assert!(!form.has_errors());
    }

    #[test]
    fn deleting_back_below_minimum_restores_error() {
        let mut form = Form::new();
        type_into(&mut form, "abcde");
        assert!(!form.has_errors());
        form.delete_char();
        assert_eq!(form.error(Field::FirstName), Some(ValidationError::TooShort));
    }

    #[test]
    fn partial_email_errors_while_typing() {
        let mut form = Form::new();
        form.focus_next();
        form.focus_next();
        form.insert_char('a');
        assert_eq!(form.error(Field::Email), Some(ValidationError::InvalidFormat));
    }

    #[test]
    fn message_never_errors_while_typing() {
        let mut form = Form::new();
        form.focus_prev(); // wrap to message
        type_into(&mut form, "hi");
        form.delete_char();
        form.delete_char();
        assert_eq!(form.error(Field::Message), None);
    }

    #[test]
    fn untouched_fields_carry_no_error() {
        let form = Form::new();
        assert!(!form.has_errors());
        assert_eq!(form.error_count(), 0);
    }

    // --- Submit-time validation ---

    #[test]
    fn validate_required_on_empty_form_records_exactly_three_errors() {
        let mut form = Form::new();
        form.validate_required();
        assert_eq!(form.error_count(), 3);
        assert_eq!(form.error(Field::FirstName), Some(ValidationError::TooShort));
        assert_eq!(
            form.error(Field::LastName),
            Some(ValidationError::MissingField)
        );
        assert_eq!(form.error(Field::Email), Some(ValidationError::InvalidFormat));
        assert_eq!(form.error(Field::Message), None);
    }

    #[test]
    fn validate_required_passes_on_valid_values() {
        let mut form = Form::new();
        type_into(&mut form, "Johnathan");
        form.focus_next();
        type_into(&mut form, "Wick");
        form.focus_next();
        type_into(&mut form, "killerz@thecontinental.com");
        form.validate_required();
        assert!(!form.has_errors());
    }

    #[test]
    fn validate_required_never_errors_on_satisfied_fields() {
        let mut form = Form::new();
        type_into(&mut form, "Johnathan");
        form.validate_required();
        assert_eq!(form.error(Field::FirstName), None);
        assert_eq!(form.error_count(), 2);
    }

    // --- Reset ---

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = Form::new();
        type_into(&mut form, "abcd");
        form.focus_next();
        form.reset();
        assert_eq!(form.value(Field::FirstName), "");
        assert_eq!(form.focused(), Field::FirstName);
        assert!(!form.has_errors());
    }

    // --- Inputs accessor ---

    #[test]
    fn inputs_are_in_form_order() {
        let form = Form::new();
        let fields: Vec<Field> = form.inputs().iter().map(|i| i.field()).collect();
        assert_eq!(fields, Field::all());
    }
}
