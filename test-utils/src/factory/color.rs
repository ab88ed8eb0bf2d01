//! Color factory for creating test color entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ColorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    hex_color: Option<String>,
}

impl<'a> ColorFactory<'a> {
    /// Creates a new ColorFactory named `"Color {id}"` with a grey swatch.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Color {}", id),
            hex_color: Some("#99aab5".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hex_color(mut self, hex_color: impl Into<String>) -> Self {
        self.hex_color = Some(hex_color.into());
        self
    }

    pub async fn build(self) -> Result<entity::color::Model, DbErr> {
        let now = Utc::now();
        entity::color::ActiveModel {
            name: ActiveValue::Set(self.name),
            hex_color: ActiveValue::Set(self.hex_color),
            status: ActiveValue::Set(ItemStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a color with default values.
pub async fn create_color(db: &DatabaseConnection) -> Result<entity::color::Model, DbErr> {
    ColorFactory::new(db).build().await
}
