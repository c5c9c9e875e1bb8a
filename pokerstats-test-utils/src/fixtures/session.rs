use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::SessionsFactModel, TestContext};

impl TestContext {
    pub fn session<'a>(&'a self) -> SessionFixtures<'a> {
        SessionFixtures { setup: self }
    }
}

pub struct SessionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SessionFixtures<'a> {
    /// Inserts a session fact with the measures from [`factory::mock_session_model`]
    ///
    /// Every dimension row referenced by the key must already exist.
    pub async fn insert_mock_session(
        &self,
        user_key: i32,
        table_key: i32,
        date_key: i32,
        time_key: i32,
    ) -> Result<SessionsFactModel, TestError> {
        Ok(
            factory::mock_session_model(user_key, table_key, date_key, time_key)
                .into_active_model()
                .reset_all()
                .insert(&self.setup.db)
                .await?,
        )
    }
}
