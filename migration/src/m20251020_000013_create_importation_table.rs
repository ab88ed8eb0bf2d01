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
                    .table(Importation::Table)
                    .if_not_exists()
                    .col(pk_auto(Importation::Id))
                    .col(integer(Importation::ProductId))
                    .col(double_null(Importation::Quantity))
                    .col(timestamp_with_time_zone_null(Importation::DateImported))
                    .col(string_len(Importation::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Importation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Importation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_importation_product_id")
                            .from(Importation::Table, Importation::ProductId)
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
            .drop_table(Table::drop().table(Importation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Importation {
    Table,
    Id,
    ProductId,
    Quantity,
    DateImported,
    Status,
    CreatedAt,
    UpdatedAt,
}
