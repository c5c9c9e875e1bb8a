//! Repositories for the date and time dimensions.
//!
//! Both dimensions are reference data with caller supplied keys: rows are
//! inserted once and only read afterwards, so no update methods exist.

use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

use crate::server::model::db::{DateModel, TimeModel};

pub struct DateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DateRepository<'a, C> {
    /// Creates a new instance of [`DateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a date row exactly as provided, including its `date_key`
    pub async fn create(&self, date: DateModel) -> Result<DateModel, DbErr> {
        date.into_active_model().reset_all().insert(self.db).await
    }

    pub async fn get_by_key(&self, date_key: i32) -> Result<Option<DateModel>, DbErr> {
        entity::prelude::DateDimension::find_by_id(date_key)
            .one(self.db)
            .await
    }
}

pub struct TimeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeRepository<'a, C> {
    /// Creates a new instance of [`TimeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a time row exactly as provided, including its `time_key`
    pub async fn create(&self, time: TimeModel) -> Result<TimeModel, DbErr> {
        time.into_active_model().reset_all().insert(self.db).await
    }

    pub async fn get_by_key(&self, time_key: i32) -> Result<Option<TimeModel>, DbErr> {
        entity::prelude::TimeDimension::find_by_id(time_key)
            .one(self.db)
            .await
    }
}
