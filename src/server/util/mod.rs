//! Utility functions and helpers for server operations.
//!
//! Database error classification shared by the services and input validation
//! for the column limits of the star schema.

pub mod db;
pub mod validate;
