use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GarmentAccessory::Table)
                    .if_not_exists()
                    .col(pk_auto(GarmentAccessory::Id))
                    .col(integer(GarmentAccessory::ProductId))
                    .col(double_null(GarmentAccessory::AmountCutting))
                    .col(timestamp_with_time_zone_null(GarmentAccessory::PassingDeliveryDate))
                    .col(boolean(GarmentAccessory::SyncStatus).default(false))
                    .col(string_len(GarmentAccessory::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(GarmentAccessory::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(GarmentAccessory::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garment_accessory_product_id")
                            .from(GarmentAccessory::Table, GarmentAccessory::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GarmentAccessory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GarmentAccessory {
    Table,
    Id,
    ProductId,
    AmountCutting,
    PassingDeliveryDate,
    SyncStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}
