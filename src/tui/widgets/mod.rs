//! Reusable TUI widgets.

pub mod form;

pub use form::{Form, Input, draw_form};
