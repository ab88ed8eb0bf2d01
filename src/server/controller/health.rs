use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::api::{self, ApiResponse, HealthDto},
    server::{controller::reply, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Reports that the server is up, with its name and version.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    reply(
        StatusCode::OK,
        api::SUCCESS,
        HealthDto {
            name: state.config.app_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}
