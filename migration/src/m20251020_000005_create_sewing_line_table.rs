use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SewingLine::Table)
                    .if_not_exists()
                    .col(pk_auto(SewingLine::Id))
                    .col(string_uniq(SewingLine::Name))
                    .col(string_len(SewingLine::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(SewingLine::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SewingLine::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SewingLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SewingLine {
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}
