use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        session::SessionDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{session::SessionService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Blank or oversized field", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username of the user")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.get_user_by_username(&username).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Change the email and/or password hash of a user
#[utoipa::path(
    patch,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username of the user")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Blank or oversized field", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email registered to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(update): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.get_user_by_username(&username).await?;
    let user = user_service.update_user(user.user_key, update).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get every session recorded for a user, oldest first
#[utoipa::path(
    get,
    path = "/api/users/{username}/sessions",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username of the user")),
    responses(
        (status = 200, description = "Success when retrieving user sessions", body = Vec<SessionDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_sessions(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);
    let session_service = SessionService::new(&state.db);

    let user = user_service.get_user_by_username(&username).await?;
    let sessions = session_service.get_user_sessions(user.user_key).await?;

    Ok((StatusCode::OK, Json(sessions)))
}
