/// Error type of the connector layer.
///
/// Query errors inside repositories stay `sea_orm::DbErr`; this type covers
/// connecting, probing and migrating.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}
