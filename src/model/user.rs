use serde::{Deserialize, Serialize};

/// A registered player. The stored password hash is never exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub user_key: i32,
    pub username: String,
    pub email: String,
    pub has_password: bool,
}

/// Sign up request
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password_hash: Option<String>,
}

/// Partial user update, fields left out are kept as they are
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password_hash: Option<String>,
}
