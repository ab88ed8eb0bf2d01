use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_product_table::Product,
    m20251020_000003_create_group_table::Group,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductGroup::Id))
                    .col(integer(ProductGroup::ProductId))
                    .col(integer(ProductGroup::GroupId))
                    .col(string_len(ProductGroup::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(ProductGroup::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProductGroup::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_group_product_id")
                            .from(ProductGroup::Table, ProductGroup::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_group_group_id")
                            .from(ProductGroup::Table, ProductGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductGroup {
    Table,
    Id,
    ProductId,
    GroupId,
    Status,
    CreatedAt,
    UpdatedAt,
}
