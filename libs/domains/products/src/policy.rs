use axum::http::StatusCode;
use axum_helpers::AppError;
use strum::{Display, EnumString};

use crate::error::{NO_ROWS_MESSAGE, NOT_FOUND_MESSAGE, ProductError};

/// Operation whose not-found outcome is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Update,
    Delete,
}

/// How a missing product is reported.
///
/// | operation | `Compat` | `Uniform` |
/// |---|---|---|
/// | get | 204 `{"error": "Doesn't exist product ID"}` | 404 |
/// | update | 500 `{"error": "sql: no rows in result set"}` | 404 |
/// | delete | 404 `{"error": "Doesn't exist product ID"}` | 404 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NotFoundPolicy {
    /// Statuses existing clients depend on
    #[default]
    Compat,
    Uniform,
}

impl NotFoundPolicy {
    pub fn not_found(self, operation: Operation) -> AppError {
        match (self, operation) {
            (NotFoundPolicy::Compat, Operation::Get) => AppError::WithStatus {
                status: StatusCode::NO_CONTENT,
                message: NOT_FOUND_MESSAGE.to_string(),
            },
            (NotFoundPolicy::Compat, Operation::Update) => {
                AppError::InternalServerError(NO_ROWS_MESSAGE.to_string())
            }
            _ => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
        }
    }

    /// Renders `err` for `operation`, routing not-found through the policy.
    pub fn map_error(self, operation: Operation, err: ProductError) -> AppError {
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, ?operation, policy = %self, "Product not found");
                self.not_found(operation)
            }
            other => other.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_compat_statuses() {
        let policy = NotFoundPolicy::Compat;
        assert_eq!(policy.not_found(Operation::Get).status(), StatusCode::NO_CONTENT);
        assert_eq!(
            policy.not_found(Operation::Update).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(policy.not_found(Operation::Update).message(), NO_ROWS_MESSAGE);
        assert_eq!(policy.not_found(Operation::Delete).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_uniform_is_always_404() {
        for operation in [Operation::Get, Operation::Update, Operation::Delete] {
            let error = NotFoundPolicy::Uniform.not_found(operation);
            assert_eq!(error.status(), StatusCode::NOT_FOUND);
            assert_eq!(error.message(), NOT_FOUND_MESSAGE);
        }
    }

    #[test]
    fn test_other_errors_ignore_policy() {
        let error = NotFoundPolicy::Compat.map_error(Operation::Get, ProductError::InvalidId);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse() {
        assert_eq!(NotFoundPolicy::from_str("compat").unwrap(), NotFoundPolicy::Compat);
        assert_eq!(NotFoundPolicy::from_str("UNIFORM").unwrap(), NotFoundPolicy::Uniform);
        assert!(NotFoundPolicy::from_str("strict").is_err());
        assert_eq!(NotFoundPolicy::default().to_string(), "compat");
    }
}
