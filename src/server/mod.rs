//! Server application core modules.
//!
//! This module contains the server side of pokerstats: configuration, the
//! SeaORM data access layer over the star schema, the store operations that
//! enforce its integrity contract, and the JSON HTTP API that exposes them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
