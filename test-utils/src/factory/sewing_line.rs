//! Sewing line factory for creating test sewing line entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SewingLineFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    status: ItemStatus,
}

impl<'a> SewingLineFactory<'a> {
    /// Creates a new SewingLineFactory named `"Line {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Line {}", id),
            status: ItemStatus::Active,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::sewing_line::Model, DbErr> {
        let now = Utc::now();
        entity::sewing_line::ActiveModel {
            name: ActiveValue::Set(self.name),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sewing line with default values.
pub async fn create_sewing_line(
    db: &DatabaseConnection,
) -> Result<entity::sewing_line::Model, DbErr> {
    SewingLineFactory::new(db).build().await
}
