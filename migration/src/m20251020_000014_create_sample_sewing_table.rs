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
                    .table(SampleSewing::Table)
                    .if_not_exists()
                    .col(pk_auto(SampleSewing::Id))
                    .col(integer(SampleSewing::ProductId))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionNpl))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateApprovalSo))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateApprovalPp))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionFirstTime))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionSecondTime))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionThirdTime))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionFourthTime))
                    .col(timestamp_with_time_zone_null(SampleSewing::DateSubmissionFifthTime))
                    .col(string_len(SampleSewing::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(SampleSewing::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SampleSewing::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_sewing_product_id")
                            .from(SampleSewing::Table, SampleSewing::ProductId)
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
            .drop_table(Table::drop().table(SampleSewing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SampleSewing {
    Table,
    Id,
    ProductId,
    DateSubmissionNpl,
    DateApprovalSo,
    DateApprovalPp,
    DateSubmissionFirstTime,
    DateSubmissionSecondTime,
    DateSubmissionThirdTime,
    DateSubmissionFourthTime,
    DateSubmissionFifthTime,
    Status,
    CreatedAt,
    UpdatedAt,
}
