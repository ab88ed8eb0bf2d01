use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessoryNote::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessoryNote::Id))
                    .col(string(AccessoryNote::Title))
                    .col(text_null(AccessoryNote::Summary))
                    .col(string_len(AccessoryNote::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(AccessoryNote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(AccessoryNote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessoryNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessoryNote {
    Table,
    Id,
    Title,
    Summary,
    Status,
    CreatedAt,
    UpdatedAt,
}
