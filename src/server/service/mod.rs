//! Service layer implementing the store operations.
//!
//! Each service borrows the [`DatabaseConnection`](sea_orm::DatabaseConnection)
//! for the duration of an operation, validates its input, checks the rows it
//! references and delegates persistence to the repositories in
//! [`data`](crate::server::data). Constraint violations raised by the database
//! are classified into [`StoreError`](crate::server::error::store::StoreError)s
//! here; nothing is retried.

pub mod calendar;
pub mod poker_table;
pub mod room;
pub mod session;
pub mod user;
