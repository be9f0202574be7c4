use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::api::rest::dto::MessageDto;
use crate::domain::error::DomainError;

/// Error response carrying a `{"message": ...}` JSON body
#[derive(Debug, Clone)]
pub struct MessageResponse {
    pub status: StatusCode,
    pub body: MessageDto,
}

impl MessageResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: MessageDto::new(message),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        let mut resp = Json(self.body).into_response();
        *resp.status_mut() = self.status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        resp
    }
}

pub fn bad_request(message: impl Into<String>) -> MessageResponse {
    MessageResponse::new(StatusCode::BAD_REQUEST, message)
}

pub fn not_found(message: impl Into<String>) -> MessageResponse {
    MessageResponse::new(StatusCode::NOT_FOUND, message)
}

pub fn internal_error() -> MessageResponse {
    MessageResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Map a domain error to its HTTP status and message
pub fn map_domain_error(e: &DomainError) -> MessageResponse {
    match e {
        DomainError::UserNotFound { .. } => not_found(e.to_string()),
        DomainError::Validation { .. }
        | DomainError::NotAdult
        | DomainError::IncorrectDateRange { .. } => bad_request(e.to_string()),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{Field, FieldError, Rule};

    fn content_type(resp: &Response) -> &str {
        resp.headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (DomainError::user_not_found(5), StatusCode::NOT_FOUND),
            (DomainError::not_adult(), StatusCode::BAD_REQUEST),
            (
                DomainError::validation(vec![FieldError::new(Field::Email, Rule::NotNull)]),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::incorrect_date_range(
                    chrono::NaiveDate::from_ymd_opt(2002, 1, 1).unwrap(),
                    chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                ),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::database("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let resp = map_domain_error(&err).into_response();
            assert_eq!(resp.status(), status, "{err}");
            assert_eq!(content_type(&resp), "application/json");
        }
    }

    #[test]
    fn database_details_are_hidden() {
        let mapped = map_domain_error(&DomainError::database("disk I/O error at /var/db"));
        assert_eq!(mapped.body.message, "Internal server error");
    }

    #[test]
    fn not_found_message_names_the_id() {
        let mapped = map_domain_error(&DomainError::user_not_found(12));
        assert_eq!(mapped.body.message, "User with id 12 not found");
    }
}
