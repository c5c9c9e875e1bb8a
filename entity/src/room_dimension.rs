use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_dimension")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_key: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub room_name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub country: String,
    #[sea_orm(column_type = "String(StringLen::N(3))")]
    pub country_code: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub state_province: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub state_province_code: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub city: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub postal_code: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub address_line1: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub address_line2: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::poker_table_dimension::Entity")]
    PokerTableDimension,
}

impl Related<super::poker_table_dimension::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokerTableDimension.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
