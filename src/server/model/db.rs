//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, used by
//! repositories and services.

/// A registered player (`user_dimension`).
pub type UserModel = entity::user_dimension::Model;

/// A card room and its address (`room_dimension`).
pub type RoomModel = entity::room_dimension::Model;

/// A table inside a room with its seating and stakes (`poker_table_dimension`).
pub type PokerTableModel = entity::poker_table_dimension::Model;

/// Calendar decomposition of a day keyed by `YYYYMMDD` (`date_dimension`).
pub type DateModel = entity::date_dimension::Model;

/// Hour/minute decomposition of a time slot (`time_dimension`).
pub type TimeModel = entity::time_dimension::Model;

/// A recorded poker session (`sessions_fact`).
///
/// Its primary key is the tuple `(user_key, table_key, date_key, time_key)`.
pub type SessionsFactModel = entity::sessions_fact::Model;
