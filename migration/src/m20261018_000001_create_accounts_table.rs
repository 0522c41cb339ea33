use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(big_integer(Accounts::GuildId))
                    .col(big_integer(Accounts::UserId))
                    .col(big_integer(Accounts::Wallet).default(0))
                    .primary_key(
                        Index::create()
                            .col(Accounts::GuildId)
                            .col(Accounts::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accounts_guild_wallet")
                    .table(Accounts::Table)
                    .col(Accounts::GuildId)
                    .col(Accounts::Wallet)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accounts {
    Table,
    GuildId,
    UserId,
    Wallet,
}
