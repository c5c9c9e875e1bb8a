use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "poker_table_dimension")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub table_key: i32,
    #[sea_orm(indexed)]
    pub room_key: i32,
    pub max_seats: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub game_type: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub limit_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub small_blind: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub big_blind: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub min_buy_in: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub max_buy_in: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub dealer_ante: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_dimension::Entity",
        from = "Column::RoomKey",
        to = "super::room_dimension::Column::RoomKey",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    RoomDimension,
    #[sea_orm(has_many = "super::sessions_fact::Entity")]
    SessionsFact,
}

impl Related<super::room_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomDimension.def()
    }
}

impl Related<super::sessions_fact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionsFact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
