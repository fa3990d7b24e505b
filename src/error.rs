//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::message;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failures surfaced by a [`crate::store::BookStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("book {0} not found")]
    NotFound(i64),
    #[error("database: {0}")]
    Persistence(#[from] sqlx::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Request-time failures. Every variant renders as `{"message": ...}`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Body could not be decoded into the expected record.
    #[error("{message}: {detail}")]
    Unprocessable { message: &'static str, detail: String },
    /// Path id segment was empty.
    #[error("id cannot be empty")]
    EmptyId,
    /// Store call failed; `message` is the endpoint's public failure text.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            // Kept for compatibility with existing clients.
            AppError::EmptyId => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            AppError::Unprocessable { message, .. } => *message,
            AppError::EmptyId => "id cannot be empty",
            AppError::Store { message, .. } => *message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store {
                source: StoreError::Persistence(_) | StoreError::Poisoned,
                ..
            } => tracing::error!(error = %self, "store failure"),
            _ => tracing::warn!(error = %self, "request rejected"),
        }
        message(self.status(), self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_wire_contract() {
        let bad_body = AppError::Unprocessable {
            message: "request failed",
            detail: "eof".into(),
        };
        assert_eq!(bad_body.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::EmptyId.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let not_found = AppError::store("cannot get book")(StoreError::NotFound(3));
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);
        let db = AppError::store("could not get the books")(StoreError::Persistence(
            sqlx::Error::PoolTimedOut,
        ));
        assert_eq!(db.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn public_message_hides_store_detail() {
        let err = AppError::store("cannot get book")(StoreError::NotFound(42));
        assert_eq!(err.public_message(), "cannot get book");
        assert!(err.to_string().contains("42"));
    }
}
