use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000003_create_lootsplit_logs_table::LootsplitLogs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootsplitRecipients::Table)
                    .if_not_exists()
                    .col(integer(LootsplitRecipients::LootsplitId))
                    .col(big_integer(LootsplitRecipients::RecipientId))
                    .primary_key(
                        Index::create()
                            .col(LootsplitRecipients::LootsplitId)
                            .col(LootsplitRecipients::RecipientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lootsplit_recipients_lootsplit_id")
                            .from(LootsplitRecipients::Table, LootsplitRecipients::LootsplitId)
                            .to(LootsplitLogs::Table, LootsplitLogs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LootsplitRecipients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootsplitRecipients {
    Table,
    LootsplitId,
    RecipientId,
}
