use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sewing_line_delivery")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "sewingLineID")]
    pub sewing_line_id: i32,
    pub quantity_original: Option<f64>,
    pub quantity_sewed: Option<f64>,
    pub expired_date: Option<DateTimeUtc>,
    pub status: ItemStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::sewing_line::Entity",
        from = "Column::SewingLineId",
        to = "super::sewing_line::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SewingLine,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::sewing_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SewingLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
