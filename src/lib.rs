//! Poker session tracking backed by a star-schema data warehouse.
//!
//! Shared request/response models live in [`model`]; the HTTP server, data
//! access layer and store operations live in [`server`].

pub mod model;
pub mod server;
