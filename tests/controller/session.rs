//! Tests for the session endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokerstats::{
    model::session::{SessionDto, SessionKey, SessionMeasuresDto},
    server::controller::session::{get_session, record_session, update_session},
};
use rust_decimal::Decimal;

use super::*;

async fn store_with_dimensions() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .with_mock_date(20240101)
        .with_mock_time(1900)
        .build()
        .await
}

fn session(user_key: i32) -> SessionDto {
    SessionDto {
        key: SessionKey {
            user_key,
            table_key: 1,
            date_key: 20240101,
            time_key: 1900,
        },
        measures: SessionMeasuresDto {
            buy_in: Decimal::new(20_000, 2),
            cash_out: Decimal::new(35_000, 2),
            duration_hours: Decimal::new(350, 2),
            ..Default::default()
        },
    }
}

/// Expect 201 Created, then 409 Conflict for the same key
#[tokio::test]
async fn record_session_conflicts_on_duplicate_key() -> Result<(), TestError> {
    let test = store_with_dimensions().await?;

    let first = record_session(State(test.into_app_state()), Json(session(1)))
        .await
        .into_response();
    let second = record_session(State(test.into_app_state()), Json(session(1)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    let recorded: SessionDto = read_json(first).await;
    assert_eq!(recorded.measures.cash_out, Decimal::new(35_000, 2));
    assert_eq!(second.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 422 Unprocessable Entity when the user does not exist
#[tokio::test]
async fn record_session_rejects_dangling_user() -> Result<(), TestError> {
    let test = store_with_dimensions().await?;

    let resp = record_session(State(test.into_app_state()), Json(session(99)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect measures to be serialized as decimal strings
#[tokio::test]
async fn get_session_serializes_measures_as_strings() -> Result<(), TestError> {
    let test = store_with_dimensions().await?;
    test.session()
        .insert_mock_session(1, 1, 20240101, 1900)
        .await?;

    let resp = get_session(State(test.into_app_state()), Path(session(1).key))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["user_key"], 1);
    let cash_out: Decimal = body["cash_out"].as_str().unwrap().parse().unwrap();
    assert_eq!(cash_out, Decimal::new(35_000, 2));

    Ok(())
}

/// Expect 200 OK with the replaced measures and 404 Not Found for an unrecorded key
#[tokio::test]
async fn update_session_by_key() -> Result<(), TestError> {
    let test = store_with_dimensions().await?;
    test.session()
        .insert_mock_session(1, 1, 20240101, 1900)
        .await?;

    let mut measures = session(1).measures;
    measures.cash_out = Decimal::ZERO;

    let updated = update_session(
        State(test.into_app_state()),
        Path(session(1).key),
        Json(measures.clone()),
    )
    .await
    .into_response();
    let missing = update_session(
        State(test.into_app_state()),
        Path(session(2).key),
        Json(measures),
    )
    .await
    .into_response();

    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
