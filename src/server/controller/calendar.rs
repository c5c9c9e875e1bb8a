use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        calendar::{DateDto, TimeDto},
    },
    server::{error::Error, model::app::AppState, service::calendar::CalendarService},
};

pub static CALENDAR_TAG: &str = "calendar";

/// Load a date dimension row
#[utoipa::path(
    post,
    path = "/api/dates",
    tag = CALENDAR_TAG,
    request_body = DateDto,
    responses(
        (status = 201, description = "Date loaded", body = DateDto),
        (status = 400, description = "Key does not match the date or oversized field", body = ErrorDto),
        (status = 409, description = "Date already loaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn insert_date(
    State(state): State<AppState>,
    Json(date): Json<DateDto>,
) -> Result<impl IntoResponse, Error> {
    let calendar_service = CalendarService::new(&state.db);

    let date = calendar_service.insert_date(date).await?;

    Ok((StatusCode::CREATED, Json(date)))
}

/// Get a date dimension row by its `YYYYMMDD` key
#[utoipa::path(
    get,
    path = "/api/dates/{date_key}",
    tag = CALENDAR_TAG,
    params(("date_key" = i32, Path, description = "Date key in YYYYMMDD form")),
    responses(
        (status = 200, description = "Success when retrieving date", body = DateDto),
        (status = 404, description = "Date not loaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_date(
    State(state): State<AppState>,
    Path(date_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let calendar_service = CalendarService::new(&state.db);

    let date = calendar_service.get_date(date_key).await?;

    Ok((StatusCode::OK, Json(date)))
}

/// Load a time dimension row
#[utoipa::path(
    post,
    path = "/api/times",
    tag = CALENDAR_TAG,
    request_body = TimeDto,
    responses(
        (status = 201, description = "Time slot loaded", body = TimeDto),
        (status = 400, description = "Hour or minute out of range, or oversized field", body = ErrorDto),
        (status = 409, description = "Time slot already loaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn insert_time(
    State(state): State<AppState>,
    Json(time): Json<TimeDto>,
) -> Result<impl IntoResponse, Error> {
    let calendar_service = CalendarService::new(&state.db);

    let time = calendar_service.insert_time(time).await?;

    Ok((StatusCode::CREATED, Json(time)))
}

/// Get a time dimension row
#[utoipa::path(
    get,
    path = "/api/times/{time_key}",
    tag = CALENDAR_TAG,
    params(("time_key" = i32, Path, description = "Key of the time slot")),
    responses(
        (status = 200, description = "Success when retrieving time slot", body = TimeDto),
        (status = 404, description = "Time slot not loaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_time(
    State(state): State<AppState>,
    Path(time_key): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let calendar_service = CalendarService::new(&state.db);

    let time = calendar_service.get_time(time_key).await?;

    Ok((StatusCode::OK, Json(time)))
}
