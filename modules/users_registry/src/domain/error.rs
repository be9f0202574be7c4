use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::validation::FieldError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{}", join_messages(.errors))]
    Validation { errors: Vec<FieldError> },

    #[error("User is not Adult")]
    NotAdult,

    #[error("User with id {id} not found")]
    UserNotFound { id: i64 },

    #[error("Parameter FROM cannot be higher then parameter TO")]
    IncorrectDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Database error: {message}")]
    Database { message: String },
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn not_adult() -> Self {
        Self::NotAdult
    }

    pub fn user_not_found(id: i64) -> Self {
        Self::UserNotFound { id }
    }

    pub fn incorrect_date_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self::IncorrectDateRange { from, to }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
