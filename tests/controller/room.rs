//! Tests for the room endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokerstats::{
    model::{poker_table::PokerTableDto, room::RoomDto},
    server::controller::room::{create_room, get_room, get_room_tables, update_room},
};

use super::*;

fn attributes(room_name: &str) -> pokerstats::model::room::RoomAttributesDto {
    RoomDto::from(factory::mock_room_model(room_name)).attributes
}

/// Expect 201 Created with the database assigned room key
#[tokio::test]
async fn create_room_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = create_room(State(test.into_app_state()), Json(attributes("Bellagio")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let room: RoomDto = read_json(resp).await;
    assert_eq!(room.room_key, 1);
    assert_eq!(room.attributes.room_name, "Bellagio");

    Ok(())
}

/// Expect 400 Bad Request for a blank room name
#[tokio::test]
async fn create_room_rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = create_room(State(test.into_app_state()), Json(attributes("")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK for an existing room and 404 Not Found otherwise
#[tokio::test]
async fn get_room_by_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .build()
        .await?;

    let found = get_room(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let missing = get_room(State(test.into_app_state()), Path(2))
        .await
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with the replaced fields
#[tokio::test]
async fn update_room_replaces_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .build()
        .await?;

    let resp = update_room(
        State(test.into_app_state()),
        Path(1),
        Json(attributes("Aria")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let room: RoomDto = read_json(resp).await;
    assert_eq!(room.attributes.room_name, "Aria");

    Ok(())
}

/// Expect 200 OK with the tables of the room
#[tokio::test]
async fn get_room_tables_lists_tables() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .with_mock_poker_table(1)
        .build()
        .await?;

    let resp = get_room_tables(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let tables: Vec<PokerTableDto> = read_json(resp).await;
    assert_eq!(tables.len(), 2);

    Ok(())
}
