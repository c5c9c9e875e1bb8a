//! SeaORM entities for the poker session star schema.
//!
//! Five dimension tables (`user_dimension`, `room_dimension`,
//! `poker_table_dimension`, `date_dimension`, `time_dimension`) are joined
//! through the `sessions_fact` table, whose primary key is the combination of
//! its four dimension keys.

pub mod prelude;

pub mod date_dimension;
pub mod poker_table_dimension;
pub mod room_dimension;
pub mod sessions_fact;
pub mod time_dimension;
pub mod user_dimension;
