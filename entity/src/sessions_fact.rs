use sea_orm::entity::prelude::*;

/// One poker session played by a user at a table, on a date, starting in a time slot.
///
/// The four dimension keys together form the primary key, so at most one fact
/// exists per user/table/date/time combination.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions_fact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub table_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub date_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub time_key: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub buy_in: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cash_out: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub duration_hours: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub drink_money: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tips: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub bonus_money: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_dimension::Entity",
        from = "Column::UserKey",
        to = "super::user_dimension::Column::UserKey",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    UserDimension,
    #[sea_orm(
        belongs_to = "super::poker_table_dimension::Entity",
        from = "Column::TableKey",
        to = "super::poker_table_dimension::Column::TableKey",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    PokerTableDimension,
    #[sea_orm(
        belongs_to = "super::date_dimension::Entity",
        from = "Column::DateKey",
        to = "super::date_dimension::Column::DateKey",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    DateDimension,
    #[sea_orm(
        belongs_to = "super::time_dimension::Entity",
        from = "Column::TimeKey",
        to = "super::time_dimension::Column::TimeKey",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TimeDimension,
}

impl Related<super::user_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDimension.def()
    }
}

impl Related<super::poker_table_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokerTableDimension.def()
    }
}

impl Related<super::date_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DateDimension.def()
    }
}

impl Related<super::time_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeDimension.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
