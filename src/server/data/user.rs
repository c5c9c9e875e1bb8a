use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, the `user_key` is assigned by the database
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: Option<String>,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user_dimension::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_key(&self, user_key: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::UserDimension::find_by_id(user_key)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::UserDimension::find()
            .filter(entity::user_dimension::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::UserDimension::find()
            .filter(entity::user_dimension::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates the email and/or password hash of a user
    ///
    /// Fields passed as `None` are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The updated user
    /// - `Ok(None)` - No user exists with the provided key
    /// - `Err(DbErr)` - Database error, including unique constraint violations on `email`
    pub async fn update(
        &self,
        user_key: i32,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get_by_key(user_key).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if email.is_none() && password_hash.is_none() {
            return Ok(Some(user));
        }

        let mut user_am = user.into_active_model();
        if let Some(email) = email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            user_am.password_hash = ActiveValue::Set(Some(password_hash));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
