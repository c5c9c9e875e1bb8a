use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PokerTableDto {
    pub table_key: i32,
    pub room_key: i32,
    #[serde(flatten)]
    pub attributes: PokerTableAttributesDto,
}

/// Seating and stakes of a poker table. Currency values carry two fractional digits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PokerTableAttributesDto {
    pub max_seats: i32,
    pub game_type: String,
    pub limit_type: String,
    pub small_blind: Decimal,
    pub big_blind: Decimal,
    pub min_buy_in: Decimal,
    pub max_buy_in: Decimal,
    #[serde(default)]
    pub dealer_ante: Decimal,
}
