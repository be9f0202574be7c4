use chrono::NaiveDate;
use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersRegistryError {
    #[error("User with id {id} not found")]
    NotFound { id: i64 },

    #[error("{message}")]
    Validation { message: String },

    #[error("User is not Adult")]
    NotAdult,

    #[error("Parameter FROM cannot be higher then parameter TO")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Internal error")]
    Internal,
}

impl UsersRegistryError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_adult() -> Self {
        Self::NotAdult
    }

    pub fn invalid_date_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self::InvalidDateRange { from, to }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UsersRegistryError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            e @ Validation { .. } => Self::validation(e.to_string()),
            NotAdult => Self::not_adult(),
            IncorrectDateRange { from, to } => Self::invalid_date_range(from, to),
            Database { .. } => Self::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::validation::{Field, FieldError, Rule};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn each_domain_error_keeps_its_own_kind() {
        assert_eq!(
            UsersRegistryError::from(DomainError::user_not_found(3)),
            UsersRegistryError::not_found(3)
        );
        assert_eq!(
            UsersRegistryError::from(DomainError::validation(vec![FieldError::new(
                Field::Email,
                Rule::NotNull
            )])),
            UsersRegistryError::validation("Email may not be null")
        );
        assert_eq!(
            UsersRegistryError::from(DomainError::not_adult()),
            UsersRegistryError::NotAdult
        );
        assert_eq!(
            UsersRegistryError::from(DomainError::incorrect_date_range(d(2002, 1, 1), d(2000, 1, 1))),
            UsersRegistryError::invalid_date_range(d(2002, 1, 1), d(2000, 1, 1))
        );
        assert_eq!(
            UsersRegistryError::from(DomainError::database("no such table: users")),
            UsersRegistryError::Internal
        );
    }

    #[test]
    fn messages_match_the_rest_api() {
        assert_eq!(UsersRegistryError::not_adult().to_string(), "User is not Adult");
        assert_eq!(
            UsersRegistryError::invalid_date_range(d(2002, 1, 1), d(2000, 1, 1)).to_string(),
            "Parameter FROM cannot be higher then parameter TO"
        );
    }
}
