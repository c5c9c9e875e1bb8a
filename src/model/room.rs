use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomDto {
    pub room_key: i32,
    #[serde(flatten)]
    pub attributes: RoomAttributesDto,
}

/// Descriptive address and locale fields of a card room
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomAttributesDto {
    pub room_name: String,
    pub country: String,
    pub country_code: String,
    pub state_province: String,
    pub state_province_code: String,
    pub city: String,
    pub postal_code: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
}
