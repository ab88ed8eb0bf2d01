use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_null(User::FullName))
                    .col(string_uniq(User::Email))
                    .col(string(User::Password))
                    .col(string_null(User::Avatar))
                    .col(string_null(User::Phone))
                    .col(string_null(User::Otp))
                    .col(text_null(User::WorkDescription))
                    .col(string_null(User::Birthday))
                    .col(text_null(User::AccessToken))
                    .col(string_len(User::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FullName,
    Email,
    Password,
    Avatar,
    Phone,
    Otp,
    WorkDescription,
    Birthday,
    AccessToken,
    Status,
    CreatedAt,
    UpdatedAt,
}
