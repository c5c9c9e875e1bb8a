use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        session::{SessionDto, SessionKey, SessionMeasuresDto},
    },
    server::{error::Error, model::app::AppState, service::session::SessionService},
};

pub static SESSION_TAG: &str = "session";

/// Record a poker session
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body = SessionDto,
    responses(
        (status = 201, description = "Session recorded", body = SessionDto),
        (status = 400, description = "Measure does not fit its column", body = ErrorDto),
        (status = 409, description = "Session already recorded for this key", body = ErrorDto),
        (status = 422, description = "User, table, date or time does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_session(
    State(state): State<AppState>,
    Json(session): Json<SessionDto>,
) -> Result<impl IntoResponse, Error> {
    let session_service = SessionService::new(&state.db);

    let session = session_service
        .record_session(session.key, session.measures)
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Get a poker session by its composite key
#[utoipa::path(
    get,
    path = "/api/sessions/{user_key}/{table_key}/{date_key}/{time_key}",
    tag = SESSION_TAG,
    params(
        ("user_key" = i32, Path, description = "Key of the player"),
        ("table_key" = i32, Path, description = "Key of the table"),
        ("date_key" = i32, Path, description = "Date key in YYYYMMDD form"),
        ("time_key" = i32, Path, description = "Key of the time slot")
    ),
    responses(
        (status = 200, description = "Success when retrieving session", body = SessionDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(key): Path<SessionKey>,
) -> Result<impl IntoResponse, Error> {
    let session_service = SessionService::new(&state.db);

    let session = session_service.get_session(key).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// Replace the measures of a recorded poker session
#[utoipa::path(
    put,
    path = "/api/sessions/{user_key}/{table_key}/{date_key}/{time_key}",
    tag = SESSION_TAG,
    params(
        ("user_key" = i32, Path, description = "Key of the player"),
        ("table_key" = i32, Path, description = "Key of the table"),
        ("date_key" = i32, Path, description = "Date key in YYYYMMDD form"),
        ("time_key" = i32, Path, description = "Key of the time slot")
    ),
    request_body = SessionMeasuresDto,
    responses(
        (status = 200, description = "Session updated", body = SessionDto),
        (status = 400, description = "Measure does not fit its column", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    Path(key): Path<SessionKey>,
    Json(measures): Json<SessionMeasuresDto>,
) -> Result<impl IntoResponse, Error> {
    let session_service = SessionService::new(&state.db);

    let session = session_service.update_session(key, measures).await?;

    Ok((StatusCode::OK, Json(session)))
}
