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
                    .table(CuttingGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(CuttingGroup::Id))
                    .col(integer(CuttingGroup::ProductId))
                    .col(double_null(CuttingGroup::QuantityRealCut))
                    .col(timestamp_with_time_zone_null(CuttingGroup::TimeCut))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateSendEmbroidered))
                    .col(double_null(CuttingGroup::QuantityDeliveredBtp))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived1))
                    .col(double_null(CuttingGroup::QuantityArrived1))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived2))
                    .col(double_null(CuttingGroup::QuantityArrived2))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived3))
                    .col(double_null(CuttingGroup::QuantityArrived3))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived4))
                    .col(double_null(CuttingGroup::QuantityArrived4))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived5))
                    .col(double_null(CuttingGroup::QuantityArrived5))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived6))
                    .col(double_null(CuttingGroup::QuantityArrived6))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived7))
                    .col(double_null(CuttingGroup::QuantityArrived7))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived8))
                    .col(double_null(CuttingGroup::QuantityArrived8))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived9))
                    .col(double_null(CuttingGroup::QuantityArrived9))
                    .col(timestamp_with_time_zone_null(CuttingGroup::DateArrived10))
                    .col(double_null(CuttingGroup::QuantityArrived10))
                    .col(boolean(CuttingGroup::SyncStatus).default(false))
                    .col(string_len(CuttingGroup::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(CuttingGroup::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CuttingGroup::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cutting_group_product_id")
                            .from(CuttingGroup::Table, CuttingGroup::ProductId)
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
            .drop_table(Table::drop().table(CuttingGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CuttingGroup {
    Table,
    Id,
    ProductId,
    QuantityRealCut,
    TimeCut,
    DateSendEmbroidered,
    QuantityDeliveredBtp,
    DateArrived1,
    QuantityArrived1,
    DateArrived2,
    QuantityArrived2,
    DateArrived3,
    QuantityArrived3,
    DateArrived4,
    QuantityArrived4,
    DateArrived5,
    QuantityArrived5,
    DateArrived6,
    QuantityArrived6,
    DateArrived7,
    QuantityArrived7,
    DateArrived8,
    QuantityArrived8,
    DateArrived9,
    QuantityArrived9,
    DateArrived10,
    QuantityArrived10,
    SyncStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}
