use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
    m20251020_000004_create_print_table::Print,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintablePlace::Table)
                    .if_not_exists()
                    .col(pk_auto(PrintablePlace::Id))
                    .col(integer(PrintablePlace::ProductId))
                    .col(integer(PrintablePlace::PrintId))
                    .col(string_len(PrintablePlace::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(PrintablePlace::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PrintablePlace::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_printable_place_product_id")
                            .from(PrintablePlace::Table, PrintablePlace::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_printable_place_print_id")
                            .from(PrintablePlace::Table, PrintablePlace::PrintId)
                            .to(Print::Table, Print::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrintablePlace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrintablePlace {
    Table,
    Id,
    ProductId,
    PrintId,
    Status,
    CreatedAt,
    UpdatedAt,
}
