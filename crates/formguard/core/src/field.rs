// File: src/field.rs
// Purpose: The four signup fields, their validity status and raw values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A signup field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Username,
    Mobile,
    Email,
    Password,
}

impl FieldName {
    /// Every field in the order it is validated and searched for focus.
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::Password,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Mobile => "mobile",
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Visible validity state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Unset,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid)
    }
}

/// Raw field values, as typed by the user.
///
/// Missing keys deserialize to empty strings, which fail every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValues {
    pub username: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Username => &mut self.username,
            FieldName::Mobile => &mut self.mobile,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        };
        *slot = value.into();
    }
}
