//! Product routes beyond the shared resource routes.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::product;

use crate::{
    model::{api, product::UpsertProductDto},
    server::{
        controller::reply_list,
        error::AppError,
        middleware::extract::ValidJson,
        service::resource::ResourceService,
        state::AppState,
    },
};

/// Updates several products at once, each body naming its row by `id`.
///
/// Items whose id matches no product are skipped; the reply lists the rows
/// that were updated.
pub async fn update_many(
    State(state): State<AppState>,
    ValidJson(payloads): ValidJson<Vec<UpsertProductDto>>,
) -> Result<impl IntoResponse, AppError> {
    let items = payloads
        .into_iter()
        .map(|mut payload| (payload.id.take(), payload))
        .collect();

    let rows = ResourceService::<product::Entity>::new(&state.db)
        .update_each(items)
        .await?;

    Ok(reply_list(StatusCode::OK, api::UPDATED, rows))
}
