use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input of the contact form
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// Every field, in the order the form renders them
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Fields that carry a validation rule. `Message` is free text.
    pub const VALIDATED: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    /// Name used by setters and in error text
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::FirstName => Some("Edd"),
            Field::LastName => Some("Burke"),
            Field::Email => Some("bluebill1049@hotmail.com"),
            Field::Message => None,
        }
    }

    pub fn is_validated(&self) -> bool {
        !matches!(self, Field::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a setter is keyed by a name that is not one of the form's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError {
    pub name: String,
}

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.name)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFieldError { name: s.to_string() })
    }
}
