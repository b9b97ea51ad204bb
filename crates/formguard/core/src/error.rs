// File: src/error.rs
// Purpose: Errors raised when the page does not provide the expected elements

use crate::field::FieldName;
use thiserror::Error;

/// Failure to reach a field on the host surface.
///
/// A rule failing is not an error; these only signal a page that is wired
/// up incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no element with id '{id}' for field {field}")]
    ElementNotFound { field: FieldName, id: String },

    #[error("element '{id}' for field {field} is not an input")]
    NotAnInput { field: FieldName, id: String },

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
