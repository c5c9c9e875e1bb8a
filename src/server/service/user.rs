use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{store::StoreError, Error},
        model::db::UserModel,
        util::{db::classify_write_error, validate},
    },
};

const USERNAME_MAX_LEN: usize = 64;
const EMAIL_MAX_LEN: usize = 120;
const PASSWORD_HASH_MAX_LEN: usize = 256;

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            user_key: user.user_key,
            username: user.username,
            email: user.email,
            has_password: user.password_hash.is_some(),
        }
    }
}

/// Service for user accounts.
///
/// Usernames and emails are unique across users. Both are checked before
/// writing; a concurrent signup that slips past the check is caught by the
/// unique indexes and reported the same way.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user with its database assigned key
    /// - `Err(Error::StoreError(InvalidInput))` - Blank or oversized field
    /// - `Err(Error::StoreError(UniquenessViolation))` - Username or email already registered
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_user(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        let username = validate::required_text("username", &user.username, USERNAME_MAX_LEN)?;
        let email = validate::required_text("email", &user.email, EMAIL_MAX_LEN)?;
        let password_hash = user
            .password_hash
            .map(|hash| validate::bounded_text("password_hash", &hash, PASSWORD_HASH_MAX_LEN))
            .transpose()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_username(&username).await?.is_some() {
            return Err(StoreError::UniquenessViolation {
                field: "username",
                value: username,
            }
            .into());
        }
        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(StoreError::UniquenessViolation {
                field: "email",
                value: email,
            }
            .into());
        }

        let user = user_repo
            .create(username.clone(), email.clone(), password_hash)
            .await
            .map_err(|err| {
                classify_write_error(err, |sql_err| match sql_err {
                    SqlErr::UniqueConstraintViolation(message) => {
                        Some(unique_user_field(message, username, email))
                    }
                    _ => None,
                })
            })?;

        tracing::info!(user_key = %user.user_key, "created user {}", user.username);

        Ok(user.into())
    }

    /// Fetches a user by their surrogate key
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(Error::StoreError(NotFound))` - No user exists with the provided key
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_user(&self, user_key: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_key(user_key).await? {
            Some(user) => Ok(user.into()),
            None => Err(StoreError::not_found("user", user_key).into()),
        }
    }

    /// Looks up a user by their exact username
    pub async fn get_user_by_username(&self, username: &str) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_username(username).await? {
            Some(user) => Ok(user.into()),
            None => Err(StoreError::not_found("user", username).into()),
        }
    }

    /// Changes the email and/or password hash of a user
    ///
    /// The username is the user's public handle and cannot be changed.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::StoreError(NotFound))` - No user exists with the provided key
    /// - `Err(Error::StoreError(UniquenessViolation))` - Email registered to another user
    /// - `Err(Error::StoreError(InvalidInput))` - Blank or oversized field
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update_user(&self, user_key: i32, update: UpdateUserDto) -> Result<UserDto, Error> {
        let email = update
            .email
            .map(|email| validate::required_text("email", &email, EMAIL_MAX_LEN))
            .transpose()?;
        let password_hash = update
            .password_hash
            .map(|hash| validate::bounded_text("password_hash", &hash, PASSWORD_HASH_MAX_LEN))
            .transpose()?;

        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &email {
            if let Some(owner) = user_repo.get_by_email(email).await? {
                if owner.user_key != user_key {
                    return Err(StoreError::UniquenessViolation {
                        field: "email",
                        value: email.clone(),
                    }
                    .into());
                }
            }
        }

        let conflicting_email = email.clone().unwrap_or_default();
        let user = user_repo
            .update(user_key, email, password_hash)
            .await
            .map_err(|err| {
                classify_write_error(err, |sql_err| match sql_err {
                    SqlErr::UniqueConstraintViolation(_) => Some(StoreError::UniquenessViolation {
                        field: "email",
                        value: conflicting_email,
                    }),
                    _ => None,
                })
            })?;

        match user {
            Some(user) => Ok(user.into()),
            None => Err(StoreError::not_found("user", user_key).into()),
        }
    }
}

/// Names the unique column a driver message refers to.
///
/// SQLite reports `UNIQUE constraint failed: user_dimension.email`, Postgres
/// reports the index name `idx-user_dimension-email`.
fn unique_user_field(message: &str, username: String, email: String) -> StoreError {
    if message.contains("email") {
        StoreError::UniquenessViolation {
            field: "email",
            value: email,
        }
    } else {
        StoreError::UniquenessViolation {
            field: "username",
            value: username,
        }
    }
}
