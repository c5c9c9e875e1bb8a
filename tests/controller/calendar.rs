//! Tests for the date and time dimension endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokerstats::{
    model::calendar::{DateDto, TimeDto},
    server::controller::calendar::{get_date, get_time, insert_date, insert_time},
};

use super::*;

/// Expect 201 Created when loading a new date and 409 Conflict when loading it again
#[tokio::test]
async fn insert_date_conflicts_on_reload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let date = DateDto::from(factory::mock_date_model(20240101));

    let first = insert_date(State(test.into_app_state()), Json(date.clone()))
        .await
        .into_response();
    let second = insert_date(State(test.into_app_state()), Json(date))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 OK with the loaded date
#[tokio::test]
async fn get_date_returns_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_date(20240101)
        .build()
        .await?;

    let resp = get_date(State(test.into_app_state()), Path(20240101))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let date: DateDto = read_json(resp).await;
    assert_eq!(date.month_name, "January");
    assert_eq!(date.full_date.to_string(), "2024-01-01");

    Ok(())
}

/// Expect 400 Bad Request for a minute outside the hour
#[tokio::test]
async fn insert_time_rejects_minute_out_of_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let mut time = TimeDto::from(factory::mock_time_model(1900));
    time.minute = 60;

    let resp = insert_time(State(test.into_app_state()), Json(time))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 Created for a new time slot and 404 Not Found for one never loaded
#[tokio::test]
async fn insert_and_get_time() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let created = insert_time(
        State(test.into_app_state()),
        Json(TimeDto::from(factory::mock_time_model(1900))),
    )
    .await
    .into_response();
    let missing = get_time(State(test.into_app_state()), Path(2000))
        .await
        .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}
