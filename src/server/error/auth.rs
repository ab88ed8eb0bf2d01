use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api, server::error::failure};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Request carried no access token")]
    MissingToken,

    /// The access token failed signature or expiry validation.
    #[error("Access token rejected: {0}")]
    InvalidToken(String),

    /// No user matches the login email, OTP email or token subject, or the
    /// user has been deleted.
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Login password does not match the stored hash.
    #[error("Wrong password for user {0}")]
    WrongPassword(String),

    /// User holds none of the roles an operation requires.
    #[error("User {0} does not hold a required role")]
    MissingRole(i32),

    /// Submitted one-time password does not match the stored one.
    #[error("Wrong OTP submitted for user {0}")]
    InvalidOtp(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `WrongPassword` → 401 Unauthorized
/// - `UserNotFound` → 404 Not Found with "User not found!"
/// - `MissingRole` → 403 Forbidden
/// - `InvalidOtp` → 400 Bad Request with "OTP code is incorrect!"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => failure(
                StatusCode::UNAUTHORIZED,
                "Access token is required!",
                None,
            ),
            Self::InvalidToken(_) => failure(
                StatusCode::UNAUTHORIZED,
                "Access token is invalid or expired!",
                None,
            ),
            Self::WrongPassword(_) => failure(
                StatusCode::UNAUTHORIZED,
                "Password is not correct!",
                None,
            ),
            Self::UserNotFound(_) => failure(StatusCode::NOT_FOUND, "User not found!", None),
            Self::MissingRole(_) => failure(StatusCode::FORBIDDEN, api::FORBIDDEN, None),
            Self::InvalidOtp(_) => failure(
                StatusCode::BAD_REQUEST,
                "OTP code is incorrect!",
                None,
            ),
        }
    }
}
