//! Sewing line delivery factory.

use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating deliveries of a product to a sewing line.
pub struct SewingLineDeliveryFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    sewing_line_id: i32,
    quantity_original: Option<f64>,
    quantity_sewed: Option<f64>,
}

impl<'a> SewingLineDeliveryFactory<'a> {
    /// Creates a new factory for the given product and sewing line.
    ///
    /// Defaults to 50 pieces delivered and none sewn yet.
    pub fn new(db: &'a DatabaseConnection, product_id: i32, sewing_line_id: i32) -> Self {
        Self {
            db,
            product_id,
            sewing_line_id,
            quantity_original: Some(50.0),
            quantity_sewed: None,
        }
    }

    pub fn quantity_original(mut self, quantity: f64) -> Self {
        self.quantity_original = Some(quantity);
        self
    }

    pub fn quantity_sewed(mut self, quantity: f64) -> Self {
        self.quantity_sewed = Some(quantity);
        self
    }

    pub async fn build(self) -> Result<entity::sewing_line_delivery::Model, DbErr> {
        let now = Utc::now();
        entity::sewing_line_delivery::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            sewing_line_id: ActiveValue::Set(self.sewing_line_id),
            quantity_original: ActiveValue::Set(self.quantity_original),
            quantity_sewed: ActiveValue::Set(self.quantity_sewed),
            expired_date: ActiveValue::Set(None),
            status: ActiveValue::Set(ItemStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a delivery with default quantities.
pub async fn create_delivery(
    db: &DatabaseConnection,
    product_id: i32,
    sewing_line_id: i32,
) -> Result<entity::sewing_line_delivery::Model, DbErr> {
    SewingLineDeliveryFactory::new(db, product_id, sewing_line_id)
        .build()
        .await
}
