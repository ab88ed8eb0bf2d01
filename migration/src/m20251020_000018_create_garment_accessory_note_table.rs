use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
    m20251020_000006_create_accessory_note_table::AccessoryNote,
    m20251020_000017_create_garment_accessory_table::GarmentAccessory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GarmentAccessoryNote::Table)
                    .if_not_exists()
                    .col(pk_auto(GarmentAccessoryNote::Id))
                    .col(integer(GarmentAccessoryNote::ProductId))
                    .col(integer(GarmentAccessoryNote::AccessoryNoteId))
                    .col(integer_null(GarmentAccessoryNote::GarmentAccessoryId))
                    .col(string(GarmentAccessoryNote::NoteStatus).default("enough"))
                    .col(string_len(GarmentAccessoryNote::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(GarmentAccessoryNote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(GarmentAccessoryNote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_accessory_note_product_id")
                            .from(GarmentAccessoryNote::Table, GarmentAccessoryNote::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_accessory_note_accessory_note_id")
                            .from(GarmentAccessoryNote::Table, GarmentAccessoryNote::AccessoryNoteId)
                            .to(AccessoryNote::Table, AccessoryNote::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_accessory_note_garment_accessory_id")
                            .from(GarmentAccessoryNote::Table, GarmentAccessoryNote::GarmentAccessoryId)
                            .to(GarmentAccessory::Table, GarmentAccessory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GarmentAccessoryNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GarmentAccessoryNote {
    Table,
    Id,
    ProductId,
    AccessoryNoteId,
    GarmentAccessoryId,
    NoteStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}
