use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_role::UserRoleRepository},
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Role names checked by role guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
        }
    }
}

/// The user a request was authenticated as, placed in request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub entity::user::Model);

/// Rejects requests without a valid access token.
///
/// Accepts `Authorization: Bearer <token>` as well as a bare token. The
/// token's subject must be a user that has not been deleted.
///
/// # Returns
/// - `Ok(Response)` - Downstream response, with `AuthUser` available to handlers
/// - `Err(AuthError::MissingToken)` - No `Authorization` header
/// - `Err(AuthError::InvalidToken)` - Bad signature or expired
/// - `Err(AuthError::UserNotFound)` - Subject unknown or deleted
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(bearer_token)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.verify(token)?;

    let Some(user) = UserRepository::new(&state.db)
        .find_active_by_id(claims.sub)
        .await?
    else {
        return Err(AuthError::UserNotFound(claims.sub.to_string()).into());
    };

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

fn bearer_token(header: &str) -> &str {
    let header = header.trim();
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .unwrap_or(header)
        .trim()
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    user: &'a AuthUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, user: &'a AuthUser) -> Self {
        Self { db, user }
    }

    /// Checks that the user holds one of `roles`.
    ///
    /// An empty list lets every authenticated user through. A role flagged
    /// `is_admin` satisfies any list.
    ///
    /// # Returns
    /// - `Ok(())` - The user may proceed
    /// - `Err(AuthError::MissingRole)` - None of the user's roles qualifies
    pub async fn require(&self, roles: &[RoleName]) -> Result<(), AppError> {
        if !self.has_any(roles).await? {
            return Err(AuthError::MissingRole(self.user.0.id).into());
        }

        Ok(())
    }

    /// Whether the user holds one of `roles`, under the same rules as
    /// [`AuthGuard::require`].
    pub async fn has_any(&self, roles: &[RoleName]) -> Result<bool, AppError> {
        if roles.is_empty() {
            return Ok(true);
        }

        let assigned = UserRoleRepository::new(self.db).roles_of(self.user.0.id).await?;

        Ok(assigned.iter().filter_map(|(_, role)| role.as_ref()).any(|role| {
            role.is_admin || roles.iter().any(|name| name.as_str() == role.role)
        }))
    }

    /// Lets administrators edit any user and everybody else only themselves.
    ///
    /// `is_self` tells whether the edited record is the caller's own. A
    /// non-administrator can never change the `status` of a user, their own
    /// included.
    ///
    /// # Returns
    /// - `Ok(())` - The edit may proceed
    /// - `Err(AuthError::MissingRole)` - The edit needs the admin role
    pub async fn require_self_or_admin(
        &self,
        is_self: bool,
        changes_status: bool,
    ) -> Result<(), AppError> {
        if is_self && !changes_status {
            return Ok(());
        }

        self.require(&[RoleName::Admin]).await
    }
}
