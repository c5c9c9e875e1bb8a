//! Test utilities for driving handlers with an AppState backed by the test database

use axum::response::Response;
use pokerstats::server::model::app::AppState;
use pokerstats_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the AppState handlers expect
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a JSON response body into `T`
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
