use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user, letting the database assign `user_key`
    pub async fn insert_user(&self, user: UserModel) -> Result<UserModel, TestError> {
        let mut user = user.into_active_model().reset_all();
        user.user_key = ActiveValue::NotSet;

        Ok(user.insert(&self.setup.db).await?)
    }

    /// Inserts a user named `username` with email `{username}@example.com`
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(factory::mock_user_model(username)).await
    }
}
