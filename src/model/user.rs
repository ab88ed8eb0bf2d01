use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ItemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as returned by the API. Credentials never leave the server, except
/// for the access token handed out by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub full_name: Option<String>,
    pub email: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub work_description: Option<String>,
    pub birthday: Option<String>,
    #[schema(value_type = String)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserDto {
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            avatar: user.avatar,
            phone: user.phone,
            work_description: user.work_description,
            birthday: user.birthday,
            status: user.status,
            access_token: None,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: i32,
    pub role: String,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub is_admin: bool,
    #[schema(value_type = String)]
    pub status: ItemStatus,
}

impl From<entity::role::Model> for RoleDto {
    fn from(role: entity::role::Model) -> Self {
        Self {
            id: role.id,
            role: role.role,
            short_name: role.short_name,
            desc: role.desc,
            is_admin: role.is_admin,
            status: role.status,
        }
    }
}

/// Role assignment joined with the role it grants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleDto {
    pub id: i32,
    #[serde(rename = "userID")]
    pub user_id: i32,
    #[serde(rename = "roleID")]
    pub role_id: i32,
    #[schema(value_type = String)]
    pub status: ItemStatus,
    pub role: Option<RoleDto>,
}

impl From<(entity::user_role::Model, Option<entity::role::Model>)> for UserRoleDto {
    fn from((user_role, role): (entity::user_role::Model, Option<entity::role::Model>)) -> Self {
        Self {
            id: user_role.id,
            user_id: user_role.user_id,
            role_id: user_role.role_id,
            status: user_role.status,
            role: role.map(RoleDto::from),
        }
    }
}

/// User create/update body. A present `password` is hashed before storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub work_description: Option<String>,
    pub birthday: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRoleDto {
    pub role: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub is_admin: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRoleDto {
    #[serde(rename = "userID")]
    pub user_id: Option<i32>,
    #[serde(rename = "roleID")]
    pub role_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}
