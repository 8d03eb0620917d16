//! TUI screen implementations.

pub mod contact_form;

pub use contact_form::{ContactFormState, draw_contact_form};
