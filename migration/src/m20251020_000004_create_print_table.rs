use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Print::Table)
                    .if_not_exists()
                    .col(pk_auto(Print::Id))
                    .col(string_uniq(Print::Name))
                    .col(string_len(Print::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Print::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Print::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Print::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Print {
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}
