//! Application error type
//!
//! Used for infrastructure failures (database startup, server bootstrap).
//! Data-API failures never surface through this type: the catalog layer
//! reports them as values inside the [`AppResponse`](crate::utils::AppResponse)
//! envelope.

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
