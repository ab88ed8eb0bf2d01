use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub product_code: String,
    #[serde(rename = "quantityPO")]
    pub quantity_po: Option<f64>,
    #[serde(rename = "dateInputNPL")]
    pub date_input_npl: Option<DateTimeUtc>,
    #[serde(rename = "dateOutputFCR")]
    pub date_output_fcr: Option<DateTimeUtc>,
    pub status: ItemStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
