use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cutting_group")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    pub quantity_real_cut: Option<f64>,
    pub time_cut: Option<DateTimeUtc>,
    pub date_send_embroidered: Option<DateTimeUtc>,
    #[serde(rename = "quantityDeliveredBTP")]
    pub quantity_delivered_btp: Option<f64>,
    #[serde(rename = "dateArrived1Th")]
    pub date_arrived_1: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived1Th")]
    pub quantity_arrived_1: Option<f64>,
    #[serde(rename = "dateArrived2Th")]
    pub date_arrived_2: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived2Th")]
    pub quantity_arrived_2: Option<f64>,
    #[serde(rename = "dateArrived3Th")]
    pub date_arrived_3: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived3Th")]
    pub quantity_arrived_3: Option<f64>,
    #[serde(rename = "dateArrived4Th")]
    pub date_arrived_4: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived4Th")]
    pub quantity_arrived_4: Option<f64>,
    #[serde(rename = "dateArrived5Th")]
    pub date_arrived_5: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived5Th")]
    pub quantity_arrived_5: Option<f64>,
    #[serde(rename = "dateArrived6Th")]
    pub date_arrived_6: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived6Th")]
    pub quantity_arrived_6: Option<f64>,
    #[serde(rename = "dateArrived7Th")]
    pub date_arrived_7: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived7Th")]
    pub quantity_arrived_7: Option<f64>,
    #[serde(rename = "dateArrived8Th")]
    pub date_arrived_8: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived8Th")]
    pub quantity_arrived_8: Option<f64>,
    #[serde(rename = "dateArrived9Th")]
    pub date_arrived_9: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived9Th")]
    pub quantity_arrived_9: Option<f64>,
    #[serde(rename = "dateArrived10Th")]
    pub date_arrived_10: Option<DateTimeUtc>,
    #[serde(rename = "quantityArrived10Th")]
    pub quantity_arrived_10: Option<f64>,
    pub sync_status: bool,
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
