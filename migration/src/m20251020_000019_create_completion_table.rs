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
                    .table(Completion::Table)
                    .if_not_exists()
                    .col(pk_auto(Completion::Id))
                    .col(integer(Completion::ProductId))
                    .col(double_null(Completion::QuantityIroned))
                    .col(double_null(Completion::QuantityCheckPassed))
                    .col(double_null(Completion::QuantityPackaged))
                    .col(timestamp_with_time_zone_null(Completion::ExportedDate))
                    .col(timestamp_with_time_zone_null(Completion::PassFiDate))
                    .col(string_len(Completion::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Completion::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Completion::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_completion_product_id")
                            .from(Completion::Table, Completion::ProductId)
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
            .drop_table(Table::drop().table(Completion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Completion {
    Table,
    Id,
    ProductId,
    QuantityIroned,
    QuantityCheckPassed,
    QuantityPackaged,
    ExportedDate,
    PassFiDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
