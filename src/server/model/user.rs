//! Users, roles and the assignments between them.

use async_trait::async_trait;
use chrono::Utc;
use entity::{role, user, user_role};
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::user::{UpsertRoleDto, UpsertUserDto, UpsertUserRoleDto, UserDto},
    server::{
        data::related::Embedder,
        error::AppError,
        middleware::auth::RoleName,
        model::{
            related::Embedded,
            resource::{
                common_column, common_columns, fill_common_defaults, set, set_some, Resource,
            },
        },
    },
};

/// Users are created through the user service, which hashes the password
/// and mails the account details. The resource impl supplies the column
/// whitelist and the conversion of every other member.
impl Resource for user::Entity {
    type Entity = Self;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type Column = user::Column;
    type Payload = UpsertUserDto;

    const NAME: &'static str = "User";
    const REQUIRED: &'static [&'static str] = &["email"];
    const WRITE_ROLES: &'static [RoleName] = &[RoleName::Admin];

    common_columns!(user);

    fn column(field: &str) -> Option<user::Column> {
        Some(match field {
            "fullName" => user::Column::FullName,
            "email" => user::Column::Email,
            "avatar" => user::Column::Avatar,
            "phone" => user::Column::Phone,
            "workDescription" => user::Column::WorkDescription,
            "birthday" => user::Column::Birthday,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertUserDto) -> user::ActiveModel {
        user::ActiveModel {
            full_name: set_some(dto.full_name),
            email: set(dto.email.map(|email| email.trim().to_lowercase())),
            avatar: set_some(dto.avatar),
            phone: set_some(dto.phone),
            work_description: set_some(dto.work_description),
            birthday: set_some(dto.birthday),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

impl Resource for role::Entity {
    type Entity = Self;
    type Model = role::Model;
    type ActiveModel = role::ActiveModel;
    type Column = role::Column;
    type Payload = UpsertRoleDto;

    const NAME: &'static str = "Role";
    const REQUIRED: &'static [&'static str] = &["role"];
    const WRITE_ROLES: &'static [RoleName] = &[RoleName::Admin];

    common_columns!(role);

    fn column(field: &str) -> Option<role::Column> {
        Some(match field {
            "role" => role::Column::Role,
            "shortName" => role::Column::ShortName,
            "desc" => role::Column::Desc,
            "isAdmin" => role::Column::IsAdmin,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertRoleDto) -> role::ActiveModel {
        role::ActiveModel {
            role: set(dto.role),
            short_name: set_some(dto.short_name),
            desc: set_some(dto.desc),
            is_admin: set(dto.is_admin),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn fill_defaults(model: &mut role::ActiveModel) {
        fill_common_defaults::<Self>(model);
        if !model.is_admin.is_set() {
            model.is_admin = ActiveValue::Set(false);
        }
    }
}

#[async_trait]
impl Resource for user_role::Entity {
    type Entity = Self;
    type Model = user_role::Model;
    type ActiveModel = user_role::ActiveModel;
    type Column = user_role::Column;
    type Payload = UpsertUserRoleDto;

    const NAME: &'static str = "User role";
    const REQUIRED: &'static [&'static str] = &["userID", "roleID"];
    const WRITE_ROLES: &'static [RoleName] = &[RoleName::Admin];

    common_columns!(user_role);

    fn column(field: &str) -> Option<user_role::Column> {
        Some(match field {
            "userID" => user_role::Column::UserId,
            "roleID" => user_role::Column::RoleId,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertUserRoleDto) -> user_role::ActiveModel {
        user_role::ActiveModel {
            user_id: set(dto.user_id),
            role_id: set(dto.role_id),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<user_role::Model>,
    ) -> Result<Vec<Embedded<user_role::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach_as::<user::Entity, UserDto>(db, "user", |row| Some(row.user_id), |user| {
                UserDto::from(user.clone())
            })
            .await?
            .attach::<role::Entity>(db, "role", |row| Some(row.role_id))
            .await?
            .into_rows())
    }
}
