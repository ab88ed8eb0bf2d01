//! Request bodies for products and the tables linking a product to its lookups.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ItemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product create/update body.
///
/// `id` is only read by the bulk update endpoint, which needs to know which
/// row each element targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductDto {
    pub id: Option<i32>,
    pub product_code: Option<String>,
    #[serde(rename = "quantityPO")]
    pub quantity_po: Option<f64>,
    #[serde(rename = "dateInputNPL")]
    pub date_input_npl: Option<DateTime<Utc>>,
    #[serde(rename = "dateOutputFCR")]
    pub date_output_fcr: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductColorDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "colorID")]
    pub color_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductGroupDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "groupID")]
    pub group_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPrintablePlaceDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "printID")]
    pub print_id: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}
