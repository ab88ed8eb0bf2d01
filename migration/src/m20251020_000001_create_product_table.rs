use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_uniq(Product::ProductCode))
                    .col(double_null(Product::QuantityPo))
                    .col(timestamp_with_time_zone_null(Product::DateInputNpl))
                    .col(timestamp_with_time_zone_null(Product::DateOutputFcr))
                    .col(string_len(Product::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ProductCode,
    QuantityPo,
    DateInputNpl,
    DateOutputFcr,
    Status,
    CreatedAt,
    UpdatedAt,
}
