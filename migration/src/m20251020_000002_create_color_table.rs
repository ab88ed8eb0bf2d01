use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Color::Table)
                    .if_not_exists()
                    .col(pk_auto(Color::Id))
                    .col(string_uniq(Color::Name))
                    .col(string_null(Color::HexColor))
                    .col(string_len(Color::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Color::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Color::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Color::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Color {
    Table,
    Id,
    Name,
    HexColor,
    Status,
    CreatedAt,
    UpdatedAt,
}
