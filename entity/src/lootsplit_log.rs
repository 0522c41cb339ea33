use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lootsplit_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub initiator_id: i64,
    pub total: i64,
    pub tax_percent: i64,
    pub tax_amount: i64,
    pub remaining: i64,
    pub share: i64,
    pub recipient_count: i64,
    /// Comma separated recipient ids, kept alongside `lootsplit_recipients`.
    #[sea_orm(column_type = "Text")]
    pub recipient_ids: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lootsplit_recipient::Entity")]
    LootsplitRecipient,
}

impl Related<super::lootsplit_recipient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LootsplitRecipient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
