//! Request bodies for the lookup tables products are tagged with.

use entity::sea_orm_active_enums::ItemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertColorDto {
    pub name: Option<String>,
    pub hex_color: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGroupDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPrintDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSewingLineDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAccessoryNoteDto {
    pub title: Option<String>,
    pub summary: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ItemStatus>,
}
