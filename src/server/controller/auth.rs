use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    model::{
        api::ApiResponse,
        auth::{LoginDto, OtpSentDto, VerifyOtpDto},
        user::UserDto,
    },
    server::{
        controller::reply,
        error::AppError,
        middleware::{
            auth::AuthUser,
            extract::{ValidJson, ValidPath},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.db,
        &state.tokens,
        state.mailer.as_ref(),
        &state.config.company_name,
    )
}

/// Log in with email and password.
///
/// Also mounted at `/api/users/login`.
///
/// # Returns
/// - `200 OK` - The user with a fresh `accessToken`
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No user has this email
#[utoipa::path(
    post,
    path = "/api/users/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserDto>),
        (status = 401, description = "Password is not correct", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).login(payload).await?;

    Ok(reply(StatusCode::OK, "Login successfully!", user))
}

/// Issue a new access token for the authenticated user.
#[utoipa::path(
    post,
    path = "/api/users/refresh",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "New access token issued", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing or invalid access token", body = ApiResponse<String>)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).refresh(user).await?;

    Ok(reply(StatusCode::OK, "Login successfully!", user))
}

/// Mail a one-time password to a registered address.
///
/// The code is delivered only by mail; the reply echoes the address.
#[utoipa::path(
    post,
    path = "/api/users/auth/send-email/{email}",
    tag = AUTH_TAG,
    params(("email" = String, Path, description = "Registered email address")),
    responses(
        (status = 200, description = "OTP mailed", body = ApiResponse<OtpSentDto>),
        (status = 404, description = "User not found", body = ApiResponse<String>),
        (status = 502, description = "Mail could not be delivered", body = ApiResponse<String>)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let sent = service(&state).send_otp(&email).await?;

    Ok(reply(
        StatusCode::OK,
        "We have sent an authentication otp code to your email address, please check your email!",
        sent,
    ))
}

/// Check a one-time password; a matching code is cleared.
#[utoipa::path(
    post,
    path = "/api/users/auth/verify-otp/{email}",
    tag = AUTH_TAG,
    params(("email" = String, Path, description = "Registered email address")),
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "OTP accepted", body = ApiResponse<UserDto>),
        (status = 400, description = "OTP code is incorrect", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
    ValidJson(payload): ValidJson<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).verify_otp(&email, &payload.otp).await?;

    Ok(reply(StatusCode::OK, "Verify successfully!", user))
}
