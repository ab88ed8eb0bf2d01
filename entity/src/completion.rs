use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "completion")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    pub quantity_ironed: Option<f64>,
    pub quantity_check_passed: Option<f64>,
    pub quantity_packaged: Option<f64>,
    pub exported_date: Option<DateTimeUtc>,
    #[serde(rename = "passFIDate")]
    pub pass_fi_date: Option<DateTimeUtc>,
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
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
