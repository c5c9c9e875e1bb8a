pub use super::date_dimension::Entity as DateDimension;
pub use super::poker_table_dimension::Entity as PokerTableDimension;
pub use super::room_dimension::Entity as RoomDimension;
pub use super::sessions_fact::Entity as SessionsFact;
pub use super::time_dimension::Entity as TimeDimension;
pub use super::user_dimension::Entity as UserDimension;
