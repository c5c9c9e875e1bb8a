//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test
//! execution. Each submodule covers one part of the star schema:
//!
//! - `factory` - Unsaved models with realistic default values
//! - `user` - User dimension rows
//! - `room` - Room and poker table dimension rows
//! - `calendar` - Date and time dimension rows
//! - `session` - Session fact rows

pub mod calendar;
pub mod factory;
pub mod room;
pub mod session;
pub mod user;
