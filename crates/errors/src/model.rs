//! Model validation error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("invalid distribution status: {value}")]
    InvalidStatus { value: String },

    #[error("missing required field: {record}.{field}")]
    MissingField { record: String, field: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("'distributionManagement.status' is not allowed in a local project")]
    StatusNotAllowed,
}

impl ModelError {
    /// Shorthand for a missing field on a named record
    pub fn missing(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            record: record.into(),
            field: field.into(),
        }
    }
}

impl UserFacingError for ModelError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidStatus { .. } => Some(
                "Use one of: none, converted, partner, deployed, verified.",
            ),
            Self::MissingField { .. } => Some("Add the missing field to the descriptor."),
            Self::InvalidValue { .. } => Some("Fix the value noted in the error message."),
            Self::StatusNotAllowed => {
                Some("Remove the status; repository tools set it when deploying.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidStatus { .. } => "model.invalid_status",
            Self::MissingField { .. } => "model.missing_field",
            Self::InvalidValue { .. } => "model.invalid_value",
            Self::StatusNotAllowed => "model.status_not_allowed",
        };
        Some(code)
    }
}
