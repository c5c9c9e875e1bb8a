use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        poker_table::{PokerTableAttributesDto, PokerTableDto},
        session::SessionDto,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{poker_table::PokerTableService, session::SessionService},
    },
};

pub static POKER_TABLE_TAG: &str = "poker_table";

/// Open a table in a card room
#[utoipa::path(
    post,
    path = "/api/rooms/{room_key}/tables",
    tag = POKER_TABLE_TAG,
    params(("room_key" = i32, Path, description = "Key of the room the table belongs to")),
    request_body = PokerTableAttributesDto,
    responses(
        (status = 201, description = "Table created", body = PokerTableDto),
        (status = 400, description = "Invalid seating, stakes or oversized field", body = ErrorDto),
        (status = 422, description = "Room does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poker_table(
    State(state): State<AppState>,
    Path(room_key): Path<i32>,
    Json(attributes): Json<PokerTableAttributesDto>,
) -> Result<impl IntoResponse, Error> {
    let table_service = PokerTableService::new(&state.db);

    let table = table_service.create_poker_table(room_key, attributes).await?;

    Ok((StatusCode::CREATED, Json(table)))
}

/// Get a poker table
#[utoipa::path(
    get,
    path = "/api/tables/{table_key}",
    tag = POKER_TABLE_TAG,
    params(("table_key" = i32, Path, description = "Key of the table")),
    responses(
        (status = 200, description = "Success when retrieving table", body = PokerTableDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poker_table(
    State(state): State<AppState>,
    Path(table_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let table_service = PokerTableService::new(&state.db);

    let table = table_service.get_poker_table(table_key).await?;

    Ok((StatusCode::OK, Json(table)))
}

/// Replace the seating and stakes of a poker table
#[utoipa::path(
    put,
    path = "/api/tables/{table_key}",
    tag = POKER_TABLE_TAG,
    params(("table_key" = i32, Path, description = "Key of the table")),
    request_body = PokerTableAttributesDto,
    responses(
        (status = 200, description = "Table updated", body = PokerTableDto),
        (status = 400, description = "Invalid seating, stakes or oversized field", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_poker_table(
    State(state): State<AppState>,
    Path(table_key): Path<i32>,
    Json(attributes): Json<PokerTableAttributesDto>,
) -> Result<impl IntoResponse, Error> {
    let table_service = PokerTableService::new(&state.db);

    let table = table_service
        .update_poker_table(table_key, attributes)
        .await?;

    Ok((StatusCode::OK, Json(table)))
}

/// Get every session played at a table, oldest first
#[utoipa::path(
    get,
    path = "/api/tables/{table_key}/sessions",
    tag = POKER_TABLE_TAG,
    params(("table_key" = i32, Path, description = "Key of the table")),
    responses(
        (status = 200, description = "Success when retrieving table sessions", body = Vec<SessionDto>),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_sessions(
    State(state): State<AppState>,
    Path(table_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let session_service = SessionService::new(&state.db);

    let sessions = session_service.get_table_sessions(table_key).await?;

    Ok((StatusCode::OK, Json(sessions)))
}
