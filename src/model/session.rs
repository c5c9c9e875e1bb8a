use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Composite key of a session fact: one row per player, table, date and time slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionKey {
    pub user_key: i32,
    pub table_key: i32,
    pub date_key: i32,
    pub time_key: i32,
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(user {}, table {}, date {}, time {})",
            self.user_key, self.table_key, self.date_key, self.time_key
        )
    }
}

/// Numeric measures recorded for a session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionMeasuresDto {
    pub buy_in: Decimal,
    pub cash_out: Decimal,
    pub duration_hours: Decimal,
    #[serde(default)]
    pub drink_money: Decimal,
    #[serde(default)]
    pub tips: Decimal,
    #[serde(default)]
    pub bonus_money: Decimal,
}

/// A session fact, used both to record a session and to return one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionDto {
    #[serde(flatten)]
    pub key: SessionKey,
    #[serde(flatten)]
    pub measures: SessionMeasuresDto,
}
