use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::Response,
    routing::{get, patch, post, put},
    Router,
};
use entity::{
    accessory_note, color, completion, cutting_group, garment_accessory, garment_accessory_note,
    group, importation, print, printable_place, product, product_color, product_group, role,
    sample_sewing, sewing_line, sewing_line_delivery, user_role,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::default_message,
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            health::{self, HEALTH_TAG},
            product::update_many,
            resource::{
                self, AccessoryNoteId, ColorId, GarmentAccessoryId, GroupId, Name, PrintId,
                ProductCode, ProductId, ResourceRouter, RoleId, RoleKey, SewingLineId, UserId,
            },
            user::{self, USER_TAG},
        },
        error::failure,
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Garment Tracker API"),
    paths(
        health::health,
        auth::login,
        auth::refresh,
        auth::send_otp,
        auth::verify_otp,
        user::create_user,
        user::get_own_roles,
        user::get_own_user,
        user::get_user,
        user::get_user_by_email,
        user::find_users,
        user::update_user,
        user::update_user_by_email,
        user::delete_user,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = HEALTH_TAG, description = "Service liveness"),
        (name = AUTH_TAG, description = "Login, token refresh and one-time passwords"),
        (name = USER_TAG, description = "User accounts"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

/// Builds the complete API router.
///
/// Health, login and OTP routes are public. Every other route sits behind
/// [`require_auth`]. Unmatched paths and methods get the failure envelope.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/users/login", post(auth::login))
        .route("/api/users/auth/login", post(auth::login))
        .route("/api/users/auth/send-email/{email}", post(auth::send_otp))
        .route("/api/users/auth/verify-otp/{email}", post(auth::verify_otp));

    let protected = Router::new()
        .nest("/api/users", users())
        .nest(
            "/api/products",
            ResourceRouter::<product::Entity>::new()
                .key::<ProductCode>()
                .route("/", put(update_many))
                .route("/{id}", patch(resource::update::<product::Entity>))
                .into_router(),
        )
        .nest(
            "/api/colors",
            ResourceRouter::<color::Entity>::new().key::<Name>().into_router(),
        )
        .nest(
            "/api/groups",
            ResourceRouter::<group::Entity>::new().key::<Name>().into_router(),
        )
        .nest(
            "/api/prints",
            ResourceRouter::<print::Entity>::new().key::<Name>().into_router(),
        )
        .nest(
            "/api/sewing-lines",
            ResourceRouter::<sewing_line::Entity>::new()
                .key::<Name>()
                .into_router(),
        )
        .nest(
            "/api/accessory-notes",
            ResourceRouter::<accessory_note::Entity>::new().into_router(),
        )
        .nest(
            "/api/roles",
            ResourceRouter::<role::Entity>::new()
                .key::<RoleKey>()
                .into_router(),
        )
        .nest(
            "/api/user-roles",
            ResourceRouter::<user_role::Entity>::new()
                .key::<UserId>()
                .key::<RoleId>()
                .sync::<UserId, RoleId>()
                .into_router(),
        )
        .nest(
            "/api/product-colors",
            ResourceRouter::<product_color::Entity>::new()
                .key::<ProductId>()
                .key::<ColorId>()
                .into_router(),
        )
        .nest(
            "/api/product-groups",
            ResourceRouter::<product_group::Entity>::new()
                .key::<ProductId>()
                .key::<GroupId>()
                .into_router(),
        )
        .nest(
            "/api/printable-places",
            ResourceRouter::<printable_place::Entity>::new()
                .key::<ProductId>()
                .key::<PrintId>()
                .into_router(),
        )
        .nest(
            "/api/importations",
            ResourceRouter::<importation::Entity>::new()
                .key::<ProductId>()
                .into_router(),
        )
        .nest(
            "/api/sample-sewings",
            ResourceRouter::<sample_sewing::Entity>::new()
                .key::<ProductId>()
                .into_router(),
        )
        .nest(
            "/api/cutting-groups",
            ResourceRouter::<cutting_group::Entity>::new()
                .key::<ProductId>()
                .into_router(),
        )
        .nest(
            "/api/sewing-line-deliveries",
            ResourceRouter::<sewing_line_delivery::Entity>::new()
                .key::<ProductId>()
                .key::<SewingLineId>()
                .sync::<ProductId, SewingLineId>()
                .into_router(),
        )
        .nest(
            "/api/garment-accessories",
            ResourceRouter::<garment_accessory::Entity>::new()
                .key::<ProductId>()
                .into_router(),
        )
        .nest(
            "/api/garment-accessory-notes",
            ResourceRouter::<garment_accessory_note::Entity>::new()
                .key::<ProductId>()
                .key::<AccessoryNoteId>()
                .key::<GarmentAccessoryId>()
                .sync::<ProductId, AccessoryNoteId>()
                .into_router(),
        )
        .nest(
            "/api/completions",
            ResourceRouter::<completion::Entity>::new()
                .key::<ProductId>()
                .into_router(),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found() -> Response {
    unmatched(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> Response {
    unmatched(StatusCode::METHOD_NOT_ALLOWED)
}

fn unmatched(status: StatusCode) -> Response {
    failure(status, default_message(status.as_u16()), None)
}

fn users() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create_user))
        .route("/refresh", post(auth::refresh))
        .route("/user-roles", get(user::get_own_roles))
        .route("/users", get(user::get_own_user))
        .route("/find", post(user::find_users))
        .route(
            "/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/email/{email}",
            get(user::get_user_by_email).put(user::update_user_by_email),
        )
}

#[cfg(test)]
mod test;
