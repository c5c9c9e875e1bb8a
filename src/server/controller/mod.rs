//! HTTP controller endpoints for the pokerstats web API.
//!
//! Axum handlers that translate JSON requests into store operations. Handlers
//! hold no logic of their own beyond extracting parameters: validation and
//! integrity checks live in the services, and every error converts into a
//! response through [`Error`](crate::server::error::Error). All handlers are
//! documented with utoipa for the OpenAPI document served at `/api/docs`.

pub mod calendar;
pub mod poker_table;
pub mod room;
pub mod session;
pub mod user;
