use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        poker_table::PokerTableDto,
        room::{RoomAttributesDto, RoomDto},
    },
    server::{error::Error, model::app::AppState, service::room::RoomService},
};

pub static ROOM_TAG: &str = "room";

/// Create a card room
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = RoomAttributesDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Blank or oversized field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(attributes): Json<RoomAttributesDto>,
) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.db);

    let room = room_service.create_room(attributes).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Get a card room
#[utoipa::path(
    get,
    path = "/api/rooms/{room_key}",
    tag = ROOM_TAG,
    params(("room_key" = i32, Path, description = "Key of the room")),
    responses(
        (status = 200, description = "Success when retrieving room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.db);

    let room = room_service.get_room(room_key).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Replace the name and address of a card room
#[utoipa::path(
    put,
    path = "/api/rooms/{room_key}",
    tag = ROOM_TAG,
    params(("room_key" = i32, Path, description = "Key of the room")),
    request_body = RoomAttributesDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Blank or oversized field", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_key): Path<i32>,
    Json(attributes): Json<RoomAttributesDto>,
) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.db);

    let room = room_service.update_room(room_key, attributes).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Get the tables of a card room
#[utoipa::path(
    get,
    path = "/api/rooms/{room_key}/tables",
    tag = ROOM_TAG,
    params(("room_key" = i32, Path, description = "Key of the room")),
    responses(
        (status = 200, description = "Success when retrieving room tables", body = Vec<PokerTableDto>),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_tables(
    State(state): State<AppState>,
    Path(room_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.db);

    let tables = room_service.get_room_tables(room_key).await?;

    Ok((StatusCode::OK, Json(tables)))
}
