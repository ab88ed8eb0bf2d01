//! Garment accessory note factory.

use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Attaches an accessory note to a product with the default `enough` marker.
///
/// # Arguments
/// - `db` - Database connection
/// - `product_id` - Id of the product row
/// - `accessory_note_id` - Id of the accessory note row
///
/// # Returns
/// - `Ok(entity::garment_accessory_note::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_garment_accessory_note(
    db: &DatabaseConnection,
    product_id: i32,
    accessory_note_id: i32,
) -> Result<entity::garment_accessory_note::Model, DbErr> {
    let now = Utc::now();
    entity::garment_accessory_note::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        accessory_note_id: ActiveValue::Set(accessory_note_id),
        garment_accessory_id: ActiveValue::Set(None),
        note_status: ActiveValue::Set("enough".to_string()),
        status: ActiveValue::Set(ItemStatus::Active),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
