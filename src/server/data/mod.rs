//! Data access layer repositories.
//!
//! One repository per relation of the star schema. Repositories are generic
//! over [`sea_orm::ConnectionTrait`] so the same code runs against a pooled
//! connection or inside a transaction, and they return raw [`sea_orm::DbErr`]s;
//! classifying errors into store contract violations is the services' job.

pub mod calendar;
pub mod poker_table;
pub mod room;
pub mod sessions_fact;
pub mod user;
