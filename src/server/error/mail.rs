use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::failure;

#[derive(Error, Debug)]
pub enum MailError {
    /// The mail relay could not be reached or returned an unreadable reply.
    #[error("Failed to reach mail relay: {0}")]
    Transport(#[from] reqwest::Error),

    /// The mail relay answered with a non-success status.
    #[error("Mail relay rejected message with status {0}")]
    Rejected(u16),
}

/// Mail failures surface as 502 Bad Gateway; the relay's reply is only logged.
impl IntoResponse for MailError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        failure(StatusCode::BAD_GATEWAY, "Failed to send email!", None)
    }
}
