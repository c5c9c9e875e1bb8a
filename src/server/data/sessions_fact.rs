use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::session::{SessionKey, SessionMeasuresDto},
    server::model::db::SessionsFactModel,
};

pub struct SessionsFactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionsFactRepository<'a, C> {
    /// Creates a new instance of [`SessionsFactRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a session fact
    ///
    /// The composite primary key rejects a second row for the same key and the
    /// foreign keys reject dangling dimension keys; both surface as [`DbErr`].
    pub async fn create(
        &self,
        key: SessionKey,
        measures: SessionMeasuresDto,
    ) -> Result<SessionsFactModel, DbErr> {
        let fact = Self::with_measures(
            entity::sessions_fact::ActiveModel {
                user_key: ActiveValue::Set(key.user_key),
                table_key: ActiveValue::Set(key.table_key),
                date_key: ActiveValue::Set(key.date_key),
                time_key: ActiveValue::Set(key.time_key),
                ..Default::default()
            },
            measures,
        );

        fact.insert(self.db).await
    }

    pub async fn get_by_key(&self, key: SessionKey) -> Result<Option<SessionsFactModel>, DbErr> {
        entity::prelude::SessionsFact::find_by_id((
            key.user_key,
            key.table_key,
            key.date_key,
            key.time_key,
        ))
        .one(self.db)
        .await
    }

    /// Gets every session of a user, oldest date and time slot first
    pub async fn get_many_by_user_key(
        &self,
        user_key: i32,
    ) -> Result<Vec<SessionsFactModel>, DbErr> {
        entity::prelude::SessionsFact::find()
            .filter(entity::sessions_fact::Column::UserKey.eq(user_key))
            .order_by_asc(entity::sessions_fact::Column::DateKey)
            .order_by_asc(entity::sessions_fact::Column::TimeKey)
            .order_by_asc(entity::sessions_fact::Column::TableKey)
            .all(self.db)
            .await
    }

    /// Gets every session played at a table, oldest date and time slot first
    pub async fn get_many_by_table_key(
        &self,
        table_key: i32,
    ) -> Result<Vec<SessionsFactModel>, DbErr> {
        entity::prelude::SessionsFact::find()
            .filter(entity::sessions_fact::Column::TableKey.eq(table_key))
            .order_by_asc(entity::sessions_fact::Column::DateKey)
            .order_by_asc(entity::sessions_fact::Column::TimeKey)
            .order_by_asc(entity::sessions_fact::Column::UserKey)
            .all(self.db)
            .await
    }

    /// Replaces the measures of an existing session
    ///
    /// # Returns
    /// - `Ok(Some(SessionsFactModel))` - The updated session
    /// - `Ok(None)` - No session exists with the provided key
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        key: SessionKey,
        measures: SessionMeasuresDto,
    ) -> Result<Option<SessionsFactModel>, DbErr> {
        if self.get_by_key(key).await?.is_none() {
            return Ok(None);
        }

        let fact = Self::with_measures(
            entity::sessions_fact::ActiveModel {
                user_key: ActiveValue::Unchanged(key.user_key),
                table_key: ActiveValue::Unchanged(key.table_key),
                date_key: ActiveValue::Unchanged(key.date_key),
                time_key: ActiveValue::Unchanged(key.time_key),
                ..Default::default()
            },
            measures,
        );

        let fact = fact.update(self.db).await?;

        Ok(Some(fact))
    }

    fn with_measures(
        mut fact: entity::sessions_fact::ActiveModel,
        measures: SessionMeasuresDto,
    ) -> entity::sessions_fact::ActiveModel {
        fact.buy_in = ActiveValue::Set(measures.buy_in);
        fact.cash_out = ActiveValue::Set(measures.cash_out);
        fact.duration_hours = ActiveValue::Set(measures.duration_hours);
        fact.drink_money = ActiveValue::Set(measures.drink_money);
        fact.tips = ActiveValue::Set(measures.tips);
        fact.bonus_money = ActiveValue::Set(measures.bonus_money);
        fact
    }
}
