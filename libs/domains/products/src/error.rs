use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid product ID";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
pub const NOT_FOUND_MESSAGE: &str = "Doesn't exist product ID";
/// Message of a no-rows update under the compatibility policy
pub const NO_ROWS_MESSAGE: &str = "sql: no rows in result set";

#[derive(Debug, Error)]
pub enum ProductError {
    /// Path id is not an integer
    #[error("Invalid product ID")]
    InvalidId,

    /// Body is not a valid product
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Doesn't exist product ID")]
    NotFound(i64),

    /// Storage failure; carries the driver's message verbatim
    #[error("{0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Operation-independent mapping. Not-found statuses that depend on the
/// operation go through [`NotFoundPolicy`](crate::policy::NotFoundPolicy).
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidId => AppError::BadRequest(INVALID_ID_MESSAGE.to_string()),
            ProductError::InvalidPayload => {
                AppError::BadRequest(INVALID_PAYLOAD_MESSAGE.to_string())
            }
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Logged once, at `error`, when the response is rendered.
impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_storage_failure_is_logged_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));

        let status = tracing::subscriber::with_default(subscriber, || {
            let err = ProductError::from(sea_orm::DbErr::Custom("relation \"products\" does not exist".into()));
            err.into_response().status()
        });

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_client_errors_map_to_400() {
        for err in [ProductError::InvalidId, ProductError::InvalidPayload] {
            assert_eq!(AppError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }
}
