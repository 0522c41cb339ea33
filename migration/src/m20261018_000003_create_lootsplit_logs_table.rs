use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootsplitLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(LootsplitLogs::Id))
                    .col(big_integer(LootsplitLogs::GuildId))
                    .col(big_integer(LootsplitLogs::InitiatorId))
                    .col(big_integer(LootsplitLogs::Total))
                    .col(big_integer(LootsplitLogs::TaxPercent))
                    .col(big_integer(LootsplitLogs::TaxAmount))
                    .col(big_integer(LootsplitLogs::Remaining))
                    .col(big_integer(LootsplitLogs::Share))
                    .col(big_integer(LootsplitLogs::RecipientCount))
                    .col(text(LootsplitLogs::RecipientIds))
                    .col(
                        timestamp(LootsplitLogs::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LootsplitLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootsplitLogs {
    Table,
    Id,
    GuildId,
    InitiatorId,
    Total,
    TaxPercent,
    TaxAmount,
    Remaining,
    Share,
    RecipientCount,
    RecipientIds,
    CreatedAt,
}
