use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
    m20251020_000005_create_sewing_line_table::SewingLine,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SewingLineDelivery::Table)
                    .if_not_exists()
                    .col(pk_auto(SewingLineDelivery::Id))
                    .col(integer(SewingLineDelivery::ProductId))
                    .col(integer(SewingLineDelivery::SewingLineId))
                    .col(double_null(SewingLineDelivery::QuantityOriginal))
                    .col(double_null(SewingLineDelivery::QuantitySewed))
                    .col(timestamp_with_time_zone_null(SewingLineDelivery::ExpiredDate))
                    .col(string_len(SewingLineDelivery::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(SewingLineDelivery::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SewingLineDelivery::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sewing_line_delivery_product_id")
                            .from(SewingLineDelivery::Table, SewingLineDelivery::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sewing_line_delivery_sewing_line_id")
                            .from(SewingLineDelivery::Table, SewingLineDelivery::SewingLineId)
                            .to(SewingLine::Table, SewingLine::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SewingLineDelivery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SewingLineDelivery {
    Table,
    Id,
    ProductId,
    SewingLineId,
    QuantityOriginal,
    QuantitySewed,
    ExpiredDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
