//! Helpers shared by the HTTP integration tests.

mod test_utils;

pub use test_utils::{read_json, TestContextExt};
