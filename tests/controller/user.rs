//! Tests for the user endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokerstats::{
    model::{
        api::ErrorDto,
        session::SessionDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::user::{create_user, get_user, get_user_sessions, update_user},
};

use super::*;

fn signup(username: &str, email: &str) -> CreateUserDto {
    CreateUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: Some("pbkdf2:sha256$hash".to_string()),
    }
}

/// Expect 201 Created with the new user and no password hash in the body
#[tokio::test]
async fn create_user_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = create_user(
        State(test.into_app_state()),
        Json(signup("nate", "nate@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["username"], "nate");
    assert_eq!(body["has_password"], true);
    assert!(body.get("password_hash").is_none());

    Ok(())
}

/// Expect 409 Conflict when the username is already registered
#[tokio::test]
async fn create_user_conflicts_on_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .build()
        .await?;

    let resp = create_user(
        State(test.into_app_state()),
        Json(signup("nate", "other@example.com")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = read_json(resp).await;
    assert!(body.error.contains("username"));

    Ok(())
}

/// Expect 400 Bad Request for a blank email
#[tokio::test]
async fn create_user_rejects_blank_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = create_user(State(test.into_app_state()), Json(signup("nate", " ")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK with the user registered under the username
#[tokio::test]
async fn get_user_returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .build()
        .await?;

    let resp = get_user(State(test.into_app_state()), Path("nate".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = read_json(resp).await;
    assert_eq!(user.user_key, 1);
    assert_eq!(user.email, "nate@example.com");

    Ok(())
}

/// Expect 404 Not Found for an unknown username
#[tokio::test]
async fn get_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;

    let resp = get_user(State(test.into_app_state()), Path("ghost".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 with a generic message when the database is not migrated
#[tokio::test]
async fn get_user_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_user(State(test.into_app_state()), Path("nate".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}

/// Expect 200 OK with the changed email
#[tokio::test]
async fn update_user_changes_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .build()
        .await?;

    let resp = update_user(
        State(test.into_app_state()),
        Path("nate".to_string()),
        Json(UpdateUserDto {
            email: Some("nate@poker.example".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = read_json(resp).await;
    assert_eq!(user.email, "nate@poker.example");

    Ok(())
}

/// Expect 409 Conflict when taking the email of another user
#[tokio::test]
async fn update_user_conflicts_on_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .with_mock_user("phil")
        .build()
        .await?;

    let resp = update_user(
        State(test.into_app_state()),
        Path("phil".to_string()),
        Json(UpdateUserDto {
            email: Some("nate@example.com".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 OK with the sessions of the user
#[tokio::test]
async fn get_user_sessions_returns_sessions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .with_mock_date(20240101)
        .with_mock_time(1900)
        .with_mock_session(1, 1, 20240101, 1900)
        .build()
        .await?;

    let resp = get_user_sessions(State(test.into_app_state()), Path("nate".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let sessions: Vec<SessionDto> = read_json(resp).await;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].key.table_key, 1);

    Ok(())
}
