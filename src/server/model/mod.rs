//! Server application models and type definitions.
//!
//! Application state shared with HTTP handlers and type aliases for the
//! SeaORM models of the star schema.

pub mod app;
pub mod db;
