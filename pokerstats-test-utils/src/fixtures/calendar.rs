use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{DateModel, TimeModel},
    TestContext,
};

impl TestContext {
    pub fn calendar<'a>(&'a self) -> CalendarFixtures<'a> {
        CalendarFixtures { setup: self }
    }
}

pub struct CalendarFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CalendarFixtures<'a> {
    /// Inserts the date dimension row for a `YYYYMMDD` key
    pub async fn insert_mock_date(&self, date_key: i32) -> Result<DateModel, TestError> {
        Ok(factory::mock_date_model(date_key)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    /// Inserts the time dimension row for an `HHMM` key
    pub async fn insert_mock_time(&self, time_key: i32) -> Result<TimeModel, TestError> {
        Ok(factory::mock_time_model(time_key)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }
}
