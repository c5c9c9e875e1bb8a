//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main pokerstats crate.

pub type UserModel = entity::user_dimension::Model;

pub type RoomModel = entity::room_dimension::Model;

pub type PokerTableModel = entity::poker_table_dimension::Model;

pub type DateModel = entity::date_dimension::Model;

pub type TimeModel = entity::time_dimension::Model;

pub type SessionsFactModel = entity::sessions_fact::Model;
