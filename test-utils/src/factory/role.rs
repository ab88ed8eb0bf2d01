//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let role = RoleFactory::new(&db)
///     .role("admin")
///     .is_admin(true)
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    role: String,
    short_name: String,
    is_admin: bool,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - role: `"role_{id}"`
    /// - short_name: `"Role {id}"`
    /// - is_admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            role: format!("role_{}", id),
            short_name: format!("Role {}", id),
            is_admin: false,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        let now = Utc::now();
        entity::role::ActiveModel {
            role: ActiveValue::Set(self.role),
            short_name: ActiveValue::Set(Some(self.short_name)),
            desc: ActiveValue::Set(None),
            is_admin: ActiveValue::Set(self.is_admin),
            status: ActiveValue::Set(ItemStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}

/// Creates the `admin` role flagged as administrator.
pub async fn create_admin_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).role("admin").is_admin(true).build().await
}
