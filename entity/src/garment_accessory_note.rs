use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "garment_accessory_note")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "accessoryNoteID")]
    pub accessory_note_id: i32,
    #[serde(rename = "garmentAccessoryID")]
    pub garment_accessory_id: Option<i32>,
    /// Free-form availability marker, `enough` unless stated otherwise.
    pub note_status: String,
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
        belongs_to = "super::accessory_note::Entity",
        from = "Column::AccessoryNoteId",
        to = "super::accessory_note::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AccessoryNote,
    #[sea_orm(
        belongs_to = "super::garment_accessory::Entity",
        from = "Column::GarmentAccessoryId",
        to = "super::garment_accessory::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GarmentAccessory,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::accessory_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessoryNote.def()
    }
}

impl Related<super::garment_accessory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GarmentAccessory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
