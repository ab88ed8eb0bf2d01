use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::{self, ApiResponse},
        query::FindRequest,
        user::{UpsertUserDto, UserDto, UserRoleDto},
    },
    server::{
        controller::{reply, reply_empty, reply_list, reply_page},
        error::AppError,
        middleware::{
            auth::{AuthGuard, AuthUser, RoleName},
            extract::{ValidJson, ValidPath},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn service(state: &AppState) -> UserService<'_> {
    UserService::new(&state.db, state.mailer.as_ref(), &state.config.company_name)
}

/// Create a user account.
///
/// The email is lowercased and the password hashed; without a password a
/// random one is generated. The login details are mailed to the new user.
///
/// # Access Control
/// - `Admin` - Only administrators can create users
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Email missing or already taken
/// - `403 Forbidden` - Caller is not an administrator
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpsertUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ApiResponse<String>),
        (status = 403, description = "Caller is not an administrator", body = ApiResponse<String>)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidJson(payload): ValidJson<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[RoleName::Admin])
        .await?;

    let created = service(&state).create(payload).await?;

    Ok(reply(StatusCode::CREATED, api::CREATED, UserDto::from(created)))
}

/// Roles of the authenticated user, each with its role row.
///
/// The user itself is returned in `meta`.
#[utoipa::path(
    get,
    path = "/api/users/user-roles",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Roles of the caller", body = ApiResponse<Vec<UserRoleDto>>),
        (status = 401, description = "Missing or invalid access token", body = ApiResponse<String>)
    ),
)]
pub async fn get_own_roles(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let roles = service(&state).roles_of(user.id).await?;
    let meta = serde_json::to_value(UserDto::from(user))
        .map_err(|e| AppError::InternalError(format!("Failed to serialise user: {}", e)))?;

    let (status, Json(body)) = reply_list(StatusCode::OK, api::SUCCESS, roles);

    Ok((status, Json(body.with_meta(meta))))
}

/// The authenticated user's own record.
#[utoipa::path(
    get,
    path = "/api/users/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing or invalid access token", body = ApiResponse<String>)
    ),
)]
pub async fn get_own_user(
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(reply(StatusCode::OK, api::SUCCESS, UserDto::from(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).get(id).await?;

    Ok(reply(StatusCode::OK, api::SUCCESS, UserDto::from(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Email address, any case")),
    responses(
        (status = 200, description = "The user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    ValidPath(email): ValidPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = service(&state).get_by_email(&email).await?;

    Ok(reply(StatusCode::OK, api::SUCCESS, UserDto::from(user)))
}

/// Paginated user list, filtered and sorted like every `find` route.
#[utoipa::path(
    post,
    path = "/api/users/find",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = FindRequest,
    responses(
        (status = 200, description = "One page of users", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Unknown field or invalid page size", body = ApiResponse<String>)
    ),
)]
pub async fn find_users(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<FindRequest>,
) -> Result<impl IntoResponse, AppError> {
    let page = service(&state).find(&request).await?;

    Ok(reply_page(api::SUCCESS, page.map(UserDto::from)))
}

/// Update a user by id; a present password is re-hashed.
///
/// # Access Control
/// - `Admin` - May update any user
/// - Any other caller - May update only their own record, without `status`
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User id")),
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 403, description = "Caller may not edit this user", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require_self_or_admin(user.0.id == id, payload.status.is_some())
        .await?;

    let user = service(&state).update(id, payload).await?;

    Ok(reply(StatusCode::OK, api::UPDATED, UserDto::from(user)))
}

/// Update a user by email; a present password is re-hashed.
///
/// # Access Control
/// - `Admin` - May update any user
/// - Any other caller - May update only their own record, without `status`
#[utoipa::path(
    put,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Email address, any case")),
    request_body = UpsertUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 403, description = "Caller may not edit this user", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn update_user_by_email(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(email): ValidPath<String>,
    ValidJson(payload): ValidJson<UpsertUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let is_self = user.0.email == email.trim().to_lowercase();
    AuthGuard::new(&state.db, &user)
        .require_self_or_admin(is_self, payload.status.is_some())
        .await?;

    let user = service(&state).update_by_email(&email, payload).await?;

    Ok(reply(StatusCode::OK, api::UPDATED, UserDto::from(user)))
}

/// Delete a user together with the user's role assignments.
///
/// # Access Control
/// - `Admin` - Only administrators can delete users
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<String>),
        (status = 403, description = "Caller is not an administrator", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[RoleName::Admin])
        .await?;

    service(&state).delete(id).await?;

    Ok(reply_empty(StatusCode::OK, api::DELETED))
}
