//! Request extractors whose rejections use the response envelope.
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies. These wrappers
//! turn the rejection into `AppError::Validation`, so a malformed body or path
//! answers 400 with the failing member listed under `meta.errors`.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
