//! Request bodies for the per-product production stages.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ItemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertImportationDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    pub quantity: Option<f64>,
    pub date_imported: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSampleSewingDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "dateSubmissionNPL")]
    pub date_submission_npl: Option<DateTime<Utc>>,
    #[serde(rename = "dateApprovalSO")]
    pub date_approval_so: Option<DateTime<Utc>>,
    #[serde(rename = "dateApprovalPP")]
    pub date_approval_pp: Option<DateTime<Utc>>,
    pub date_submission_first_time: Option<DateTime<Utc>>,
    pub date_submission_second_time: Option<DateTime<Utc>>,
    pub date_submission_third_time: Option<DateTime<Utc>>,
    #[serde(rename = "dateSubmissionForthTime")]
    pub date_submission_fourth_time: Option<DateTime<Utc>>,
    pub date_submission_fifth_time: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

/// Cutting progress of a product.
///
/// Embroidered pieces come back in up to ten deliveries, each recorded as an
/// arrival date and quantity pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCuttingGroupDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    pub quantity_real_cut: Option<f64>,
    pub time_cut: Option<DateTime<Utc>>,
    pub date_send_embroidered: Option<DateTime<Utc>>,
    #[serde(rename = "quantityDeliveredBTP")]
    pub quantity_delivered_btp: Option<f64>,
    #[serde(rename = "dateArrived1Th")]
    pub date_arrived_1: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived1Th")]
    pub quantity_arrived_1: Option<f64>,
    #[serde(rename = "dateArrived2Th")]
    pub date_arrived_2: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived2Th")]
    pub quantity_arrived_2: Option<f64>,
    #[serde(rename = "dateArrived3Th")]
    pub date_arrived_3: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived3Th")]
    pub quantity_arrived_3: Option<f64>,
    #[serde(rename = "dateArrived4Th")]
    pub date_arrived_4: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived4Th")]
    pub quantity_arrived_4: Option<f64>,
    #[serde(rename = "dateArrived5Th")]
    pub date_arrived_5: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived5Th")]
    pub quantity_arrived_5: Option<f64>,
    #[serde(rename = "dateArrived6Th")]
    pub date_arrived_6: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived6Th")]
    pub quantity_arrived_6: Option<f64>,
    #[serde(rename = "dateArrived7Th")]
    pub date_arrived_7: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived7Th")]
    pub quantity_arrived_7: Option<f64>,
    #[serde(rename = "dateArrived8Th")]
    pub date_arrived_8: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived8Th")]
    pub quantity_arrived_8: Option<f64>,
    #[serde(rename = "dateArrived9Th")]
    pub date_arrived_9: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived9Th")]
    pub quantity_arrived_9: Option<f64>,
    #[serde(rename = "dateArrived10Th")]
    pub date_arrived_10: Option<DateTime<Utc>>,
    #[serde(rename = "quantityArrived10Th")]
    pub quantity_arrived_10: Option<f64>,
    pub sync_status: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSewingLineDeliveryDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "sewingLineID")]
    pub sewing_line_id: Option<i32>,
    pub quantity_original: Option<f64>,
    pub quantity_sewed: Option<f64>,
    pub expired_date: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGarmentAccessoryDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    pub amount_cutting: Option<f64>,
    pub passing_delivery_date: Option<DateTime<Utc>>,
    pub sync_status: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGarmentAccessoryNoteDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "accessoryNoteID")]
    pub accessory_note_id: Option<i32>,
    #[serde(rename = "garmentAccessoryID")]
    pub garment_accessory_id: Option<i32>,
    pub note_status: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCompletionDto {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    pub quantity_ironed: Option<f64>,
    pub quantity_check_passed: Option<f64>,
    pub quantity_packaged: Option<f64>,
    pub exported_date: Option<DateTime<Utc>>,
    #[serde(rename = "passFIDate")]
    pub pass_fi_date: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}
