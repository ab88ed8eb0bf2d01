//! Accessory note factory for creating test accessory note entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an accessory note titled `"Note {id}"`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::accessory_note::Model)` - Created accessory note
/// - `Err(DbErr)` - Database error during insert
pub async fn create_accessory_note(
    db: &DatabaseConnection,
) -> Result<entity::accessory_note::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::accessory_note::ActiveModel {
        title: ActiveValue::Set(format!("Note {}", id)),
        summary: ActiveValue::Set(Some("Buttons and zippers".to_string())),
        status: ActiveValue::Set(ItemStatus::Active),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
