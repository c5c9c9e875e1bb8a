//! Tests for the poker table endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokerstats::{
    model::{
        api::ErrorDto,
        poker_table::{PokerTableAttributesDto, PokerTableDto},
    },
    server::controller::poker_table::{
        create_poker_table, get_poker_table, get_table_sessions, update_poker_table,
    },
};
use rust_decimal::Decimal;

use super::*;

fn attributes() -> PokerTableAttributesDto {
    PokerTableDto::from(factory::mock_poker_table_model(0)).attributes
}

/// Expect 201 Created with the table placed in the room from the path
#[tokio::test]
async fn create_poker_table_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .build()
        .await?;

    let resp = create_poker_table(State(test.into_app_state()), Path(1), Json(attributes()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let table: PokerTableDto = read_json(resp).await;
    assert_eq!(table.room_key, 1);
    assert_eq!(table.attributes.max_buy_in, Decimal::new(30_000, 2));

    Ok(())
}

/// Expect 422 Unprocessable Entity naming the room when it does not exist
#[tokio::test]
async fn create_poker_table_rejects_dangling_room() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = create_poker_table(State(test.into_app_state()), Path(7), Json(attributes()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Referenced room 7 does not exist");

    Ok(())
}

/// Expect 200 OK for an existing table and 404 Not Found otherwise
#[tokio::test]
async fn get_poker_table_by_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .build()
        .await?;

    let found = get_poker_table(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let missing = get_poker_table(State(test.into_app_state()), Path(2))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when updating a table that does not exist
#[tokio::test]
async fn update_poker_table_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = update_poker_table(State(test.into_app_state()), Path(1), Json(attributes()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with an empty list for a table nobody played at
#[tokio::test]
async fn get_table_sessions_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .build()
        .await?;

    let resp = get_table_sessions(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let sessions: Vec<serde_json::Value> = read_json(resp).await;
    assert!(sessions.is_empty());

    Ok(())
}
