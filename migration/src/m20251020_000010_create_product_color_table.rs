use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
    m20251020_000002_create_color_table::Color,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductColor::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductColor::Id))
                    .col(integer(ProductColor::ProductId))
                    .col(integer(ProductColor::ColorId))
                    .col(string_len(ProductColor::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(ProductColor::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProductColor::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_color_product_id")
                            .from(ProductColor::Table, ProductColor::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_color_color_id")
                            .from(ProductColor::Table, ProductColor::ColorId)
                            .to(Color::Table, Color::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductColor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductColor {
    Table,
    Id,
    ProductId,
    ColorId,
    Status,
    CreatedAt,
    UpdatedAt,
}
