//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying the status code
//! each store outcome maps onto and the JSON returned to the client.

mod calendar;
mod poker_table;
mod room;
mod session;
mod user;

use pokerstats_test_utils::prelude::*;

use crate::util::{read_json, TestContextExt};
