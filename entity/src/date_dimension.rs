use sea_orm::entity::prelude::*;

/// Calendar decomposition of a single day, keyed by `YYYYMMDD`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "date_dimension")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date_key: i32,
    pub full_date: Date,
    pub day_of_week: i16,
    pub day_num_in_month: i16,
    pub day_num_overall: i32,
    #[sea_orm(column_type = "String(StringLen::N(9))")]
    pub day_name: String,
    #[sea_orm(column_type = "Char(Some(3))")]
    pub day_abbrev: String,
    #[sea_orm(column_type = "Char(Some(1))")]
    pub weekday_flag: String,
    pub week_num_in_year: i16,
    pub week_num_overall: i16,
    pub week_begin_date: Date,
    pub week_begin_date_key: i32,
    pub month: i16,
    pub month_num_overall: i16,
    #[sea_orm(column_type = "String(StringLen::N(9))")]
    pub month_name: String,
    #[sea_orm(column_type = "Char(Some(3))")]
    pub month_abbrev: String,
    pub quarter: i16,
    pub year: i16,
    pub yearmo: i32,
    #[sea_orm(column_type = "Char(Some(1))")]
    pub last_day_in_month_flag: String,
    pub same_day_year_ago_date: Date,
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
