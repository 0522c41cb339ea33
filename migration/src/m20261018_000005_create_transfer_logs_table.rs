use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransferLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(TransferLogs::Id))
                    .col(big_integer(TransferLogs::GuildId))
                    .col(big_integer(TransferLogs::SenderId))
                    .col(big_integer(TransferLogs::ReceiverId))
                    .col(big_integer(TransferLogs::Amount))
                    .col(
                        timestamp(TransferLogs::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransferLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransferLogs {
    Table,
    Id,
    GuildId,
    SenderId,
    ReceiverId,
    Amount,
    CreatedAt,
}
