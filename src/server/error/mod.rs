//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every failure reaches the client as the standard response
//! envelope with `success: false`.

pub mod auth;
pub mod config;
pub mod mail;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    model::api::{self, ApiResponse, FieldError},
    server::error::{auth::AuthError, config::ConfigError, mail::MailError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden, etc.).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign-key violations are reported as 400 Bad Request and a
    /// missing record as 404 Not Found. Everything else is a 500 with the
    /// details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Outgoing mail could not be delivered.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request body or path failed validation.
    ///
    /// Results in 400 Bad Request with every offending member listed under
    /// `meta.errors`.
    #[error("Error validate request")]
    Validation(Vec<FieldError>),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation("path", rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and an envelope
/// body. Internal errors are logged with full details but return a generic
/// message to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and constraint violations
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr` and `MailErr`, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::MailErr(err) => err.into_response(),
            Self::DbErr(err) => db_error_response(err),
            Self::NotFound(msg) => failure(StatusCode::NOT_FOUND, msg, None),
            Self::Validation(errors) => failure(
                StatusCode::BAD_REQUEST,
                api::VALIDATION_FAILED,
                Some(json!({ "errors": errors })),
            ),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    api::INTERNAL_SERVER_ERROR,
                    None,
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => failure(
            StatusCode::BAD_REQUEST,
            "Unique constraint error!",
            Some(json!({ "detailError": detail })),
        ),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => failure(
            StatusCode::BAD_REQUEST,
            "Foreign key constraint error!",
            Some(json!({ "detailError": detail })),
        ),
        _ => match err {
            DbErr::RecordNotFound(msg) => failure(StatusCode::NOT_FOUND, msg, None),
            err => InternalServerError(err).into_response(),
        },
    }
}

/// Builds a failure envelope response.
///
/// # Arguments
/// - `status` - HTTP status of the response
/// - `message` - Envelope message
/// - `meta` - Optional envelope `meta` member
///
/// # Returns
/// - `Response` - JSON envelope with `success: false`
pub(crate) fn failure(status: StatusCode, message: impl Into<String>, meta: Option<Value>) -> Response {
    let mut body: ApiResponse<Value> = ApiResponse::new(status.as_u16(), message);
    body.meta = meta;

    (status, Json(body)).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic message to the client to
/// avoid leaking implementation details. Used as a fallback for errors that don't
/// have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            api::INTERNAL_SERVER_ERROR,
            None,
        )
    }
}
