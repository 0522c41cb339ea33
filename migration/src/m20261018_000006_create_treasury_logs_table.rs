use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TreasuryLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(TreasuryLogs::Id))
                    .col(big_integer(TreasuryLogs::GuildId))
                    .col(big_integer(TreasuryLogs::InitiatorId))
                    .col(string(TreasuryLogs::Action))
                    .col(big_integer(TreasuryLogs::Amount))
                    .col(big_integer_null(TreasuryLogs::RecipientId))
                    .col(
                        timestamp(TreasuryLogs::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TreasuryLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TreasuryLogs {
    Table,
    Id,
    GuildId,
    InitiatorId,
    Action,
    Amount,
    RecipientId,
    CreatedAt,
}
