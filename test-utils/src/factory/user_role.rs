//! User role factory for linking users to roles.

use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links an existing user to an existing role.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user row
/// - `role_id` - Id of the role row
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created link
/// - `Err(DbErr)` - Database error during insert (including missing parents)
pub async fn create_user_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    let now = Utc::now();
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
        status: ActiveValue::Set(ItemStatus::Active),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
