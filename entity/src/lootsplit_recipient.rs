use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lootsplit_recipients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lootsplit_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipient_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lootsplit_log::Entity",
        from = "Column::LootsplitId",
        to = "super::lootsplit_log::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LootsplitLog,
}

impl Related<super::lootsplit_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LootsplitLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
