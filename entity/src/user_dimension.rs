use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_dimension")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_key: i32,
    #[sea_orm(column_type = "String(StringLen::N(64))", unique, indexed)]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique, indexed)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(256))", nullable)]
    pub password_hash: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions_fact::Entity")]
    SessionsFact,
}

impl Related<super::sessions_fact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionsFact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
