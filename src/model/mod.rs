mod field;
mod submission;
mod validation;

pub use field::Field;
pub use submission::Submission;
pub use validation::{
    FIRST_NAME_MIN_CHARS, ValidationError, validate, validate_email, validate_first_name,
    validate_last_name,
};
