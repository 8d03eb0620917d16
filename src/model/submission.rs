use super::Field;
use super::validation::{ValidationError, validate_email, validate_first_name, validate_last_name};

/// The last set of field values accepted by validation at submit time.
///
/// A `Submission` is only constructible through [`Submission::new`], so every
/// instance is known to have carried a valid first name, last name, and email
/// at creation. The message is kept verbatim, including when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Validates the required fields and builds the snapshot.
    ///
    /// Callers that want every outstanding error at once should validate
    /// field-by-field first; this constructor reports only the first failure
    /// and exists as the invariant guard.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        validate_email(&email)?;

        Ok(Self {
            first_name,
            last_name,
            email,
            message: message.into(),
        })
    }

    /// Returns the submitted value for `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Returns the summary display entries in form order.
    ///
    /// First name, last name, and email are always present; the message entry
    /// exists only when the message is non-empty. The summary renderer and
    /// the test-query contract (via [`Field::display_id`]) both consume this
    /// as the single source of truth.
    pub fn display_entries(&self) -> Vec<(Field, &str)> {
        Field::all()
            .iter()
            .filter(|f| f.is_required() || !self.value(**f).is_empty())
            .map(|f| (*f, self.value(*f)))
            .collect()
    }
}
