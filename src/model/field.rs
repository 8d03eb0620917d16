use std::fmt;

/// A named input slot in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

static ALL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Message,
];

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Display label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Whether the field must satisfy its rule for submission to succeed.
    ///
    /// `Message` is the only optional field: it never blocks a submit.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Message)
    }

    /// Stable identifier for this field's summary display element.
    ///
    /// These names are a compatibility contract with downstream harnesses;
    /// renaming them is a breaking change.
    pub fn display_id(&self) -> &'static str {
        match self {
            Field::FirstName => "firstnameDisplay",
            Field::LastName => "lastnameDisplay",
            Field::Email => "emailDisplay",
            Field::Message => "messageDisplay",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
