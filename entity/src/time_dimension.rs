use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "time_dimension")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_key: i32,
    pub hour: i32,
    pub minute: i32,
    #[sea_orm(column_type = "String(StringLen::N(2))")]
    pub am_pm: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub time_of_day: String,
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
