//! The four user-detail fields and the two records keyed by them.

use std::str::FromStr;

use strum::IntoEnumIterator;

/// One of the four inputs on the details form.
///
/// `as_ref()` yields the name used for the input element in the DOM.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::AsRefStr, strum::EnumIs,
)]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    PhoneNum,
    Dob,
}

/// An input reported a name that is not one of the four form fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::iter()
            .find(|field| field.as_ref() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl FieldName {
    /// Label text shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Username:",
            FieldName::Email => "Email Address:",
            FieldName::PhoneNum => "Phone Number:",
            FieldName::Dob => "Date of Birth:",
        }
    }

    /// The HTML input type for this field.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldName::Name => "text",
            FieldName::Email => "email",
            FieldName::PhoneNum => "tel",
            FieldName::Dob => "date",
        }
    }

    /// Element id of the input.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldName::Name => "username",
            FieldName::Email => "email",
            FieldName::PhoneNum => "phone",
            FieldName::Dob => "dob",
        }
    }
}

/// The values currently entered in the form. All empty on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub name: String,
    pub email: String,
    pub phone_num: String,
    pub dob: String,
}

impl FieldSet {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::PhoneNum => &self.phone_num,
            FieldName::Dob => &self.dob,
        }
    }

    /// Replaces exactly one field's value.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNum => &mut self.phone_num,
            FieldName::Dob => &mut self.dob,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        FieldName::iter().all(|field| self.get(field).is_empty())
    }
}

/// Per-field messages. An empty string means the field has no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSet {
    pub name: String,
    pub email: String,
    pub phone_num: String,
    pub dob: String,
}

impl ErrorSet {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::PhoneNum => &self.phone_num,
            FieldName::Dob => &self.dob,
        }
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNum => &mut self.phone_num,
            FieldName::Dob => &mut self.dob,
        };
        *slot = message.into();
    }

    /// True when no field carries a message.
    pub fn is_clear(&self) -> bool {
        FieldName::iter().all(|field| self.get(field).is_empty())
    }

    /// Fields that currently carry a message, in form order.
    pub fn failing(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, message)| !message.is_empty())
    }
}
