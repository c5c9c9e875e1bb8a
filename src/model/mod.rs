//! Data transfer objects exchanged with API consumers.

pub mod api;
pub mod calendar;
pub mod poker_table;
pub mod room;
pub mod session;
pub mod user;
