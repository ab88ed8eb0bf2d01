//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .product_code("PO-0042")
///     .quantity_po(1200.0)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    product_code: String,
    quantity_po: Option<f64>,
    status: ItemStatus,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - product_code: `"PRODUCT-{id}"` where id is auto-incremented
    /// - quantity_po: `Some(100.0)`
    /// - status: `ItemStatus::Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            product_code: format!("PRODUCT-{}", id),
            quantity_po: Some(100.0),
            status: ItemStatus::Active,
        }
    }

    pub fn product_code(mut self, product_code: impl Into<String>) -> Self {
        self.product_code = product_code.into();
        self
    }

    pub fn quantity_po(mut self, quantity_po: f64) -> Self {
        self.quantity_po = Some(quantity_po);
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            product_code: ActiveValue::Set(self.product_code),
            quantity_po: ActiveValue::Set(self.quantity_po),
            date_input_npl: ActiveValue::Set(None),
            date_output_fcr: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
