//! HTTP request handlers.
//!
//! Every handler answers with the response envelope. The helpers below build
//! the success envelopes; failures are produced by `AppError::into_response`.

pub mod auth;
pub mod health;
pub mod product;
pub mod resource;
pub mod user;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::{model::api::ApiResponse, server::model::query::Page};

type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

/// Envelope carrying one payload.
pub(crate) fn reply<T: Serialize>(status: StatusCode, message: &str, data: T) -> Reply<T> {
    (
        status,
        Json(ApiResponse::new(status.as_u16(), message).with_data(data)),
    )
}

/// Envelope carrying a list, with `length` set to the number of rows.
pub(crate) fn reply_list<T: Serialize>(
    status: StatusCode,
    message: &str,
    items: Vec<T>,
) -> Reply<Vec<T>> {
    let mut body = ApiResponse::new(status.as_u16(), message);
    body.length = Some(items.len() as u64);

    (status, Json(body.with_data(items)))
}

/// Envelope carrying one page of a list query.
pub(crate) fn reply_page<T: Serialize>(message: &str, page: Page<T>) -> Reply<Vec<T>> {
    let mut body = ApiResponse::new(StatusCode::OK.as_u16(), message);
    body.length = Some(page.items.len() as u64);
    body.page = Some(page.page);
    body.page_size = Some(page.page_size);
    body.total = Some(page.total);

    (StatusCode::OK, Json(body.with_data(page.items)))
}

/// Envelope without payload.
pub(crate) fn reply_empty(status: StatusCode, message: &str) -> Reply<()> {
    (status, Json(ApiResponse::new(status.as_u16(), message)))
}
