//! Session facts.
//!
//! A session is keyed by the player, the table, the date and the time slot it
//! was played in. Recording one runs inside a transaction so the reference
//! checks and the insert observe the same state.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::session::{SessionDto, SessionKey, SessionMeasuresDto},
    server::{
        data::{
            calendar::{DateRepository, TimeRepository},
            poker_table::PokerTableRepository,
            sessions_fact::SessionsFactRepository,
            user::UserRepository,
        },
        error::{store::StoreError, Error},
        model::db::SessionsFactModel,
        util::{db::classify_write_error, validate},
    },
};

impl From<SessionsFactModel> for SessionDto {
    fn from(fact: SessionsFactModel) -> Self {
        Self {
            key: SessionKey {
                user_key: fact.user_key,
                table_key: fact.table_key,
                date_key: fact.date_key,
                time_key: fact.time_key,
            },
            measures: SessionMeasuresDto {
                buy_in: fact.buy_in,
                cash_out: fact.cash_out,
                duration_hours: fact.duration_hours,
                drink_money: fact.drink_money,
                tips: fact.tips,
                bonus_money: fact.bonus_money,
            },
        }
    }
}

/// Service for recording and reading poker sessions.
pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    /// Creates a new instance of [`SessionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a session for an existing user, table, date and time slot
    ///
    /// References are checked in the order user, table, date, time and the first
    /// one that does not resolve is reported. A session can be recorded once per
    /// key; changing its measures afterwards goes through [`Self::update_session`].
    ///
    /// # Returns
    /// - `Ok(SessionDto)` - The recorded session
    /// - `Err(Error::StoreError(ReferentialIntegrityViolation))` - A key does not resolve
    /// - `Err(Error::StoreError(DuplicateKeyViolation))` - A session with the same key exists
    /// - `Err(Error::StoreError(InvalidInput))` - A measure does not fit its column
    /// - `Err(Error::DbErr)` - Database error, the transaction is rolled back
    pub async fn record_session(
        &self,
        key: SessionKey,
        measures: SessionMeasuresDto,
    ) -> Result<SessionDto, Error> {
        let measures = validate_measures(measures)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .get_by_key(key.user_key)
            .await?
            .is_none()
        {
            return Err(StoreError::dangling("user", key.user_key).into());
        }
        if PokerTableRepository::new(&txn)
            .get_by_key(key.table_key)
            .await?
            .is_none()
        {
            return Err(StoreError::dangling("poker table", key.table_key).into());
        }
        if DateRepository::new(&txn)
            .get_by_key(key.date_key)
            .await?
            .is_none()
        {
            return Err(StoreError::dangling("date", key.date_key).into());
        }
        if TimeRepository::new(&txn)
            .get_by_key(key.time_key)
            .await?
            .is_none()
        {
            return Err(StoreError::dangling("time", key.time_key).into());
        }

        let fact_repo = SessionsFactRepository::new(&txn);

        if fact_repo.get_by_key(key).await?.is_some() {
            return Err(StoreError::duplicate("session", key).into());
        }

        let fact = fact_repo
            .create(key, measures)
            .await
            .map_err(|err| classify_session_write(err, key))?;

        txn.commit().await?;

        tracing::info!(session = %key, "recorded session");

        Ok(fact.into())
    }

    /// Fetches a recorded session by its composite key
    ///
    /// # Returns
    /// - `Ok(SessionDto)` - The session
    /// - `Err(Error::StoreError(NotFound))` - No session exists with the provided key
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_session(&self, key: SessionKey) -> Result<SessionDto, Error> {
        let fact_repo = SessionsFactRepository::new(self.db);

        match fact_repo.get_by_key(key).await? {
            Some(fact) => Ok(fact.into()),
            None => Err(StoreError::not_found("session", key).into()),
        }
    }

    /// Replaces the measures of a recorded session
    pub async fn update_session(
        &self,
        key: SessionKey,
        measures: SessionMeasuresDto,
    ) -> Result<SessionDto, Error> {
        let measures = validate_measures(measures)?;

        let fact_repo = SessionsFactRepository::new(self.db);

        match fact_repo.update(key, measures).await? {
            Some(fact) => Ok(fact.into()),
            None => Err(StoreError::not_found("session", key).into()),
        }
    }

    /// Lists the sessions of a user, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<SessionDto>)` - Sessions of the user, empty if none were recorded
    /// - `Err(Error::StoreError(NotFound))` - No user exists with the provided key
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_user_sessions(&self, user_key: i32) -> Result<Vec<SessionDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let fact_repo = SessionsFactRepository::new(self.db);

        if user_repo.get_by_key(user_key).await?.is_none() {
            return Err(StoreError::not_found("user", user_key).into());
        }

        let facts = fact_repo.get_many_by_user_key(user_key).await?;

        Ok(facts.into_iter().map(SessionDto::from).collect())
    }

    /// Lists the sessions played at a table, oldest first
    pub async fn get_table_sessions(&self, table_key: i32) -> Result<Vec<SessionDto>, Error> {
        let table_repo = PokerTableRepository::new(self.db);
        let fact_repo = SessionsFactRepository::new(self.db);

        if table_repo.get_by_key(table_key).await?.is_none() {
            return Err(StoreError::not_found("poker table", table_key).into());
        }

        let facts = fact_repo.get_many_by_table_key(table_key).await?;

        Ok(facts.into_iter().map(SessionDto::from).collect())
    }
}

/// Maps a rejected session insert onto the store error the constraint stands for.
fn classify_session_write(err: DbErr, key: SessionKey) -> Error {
    classify_write_error(err, |sql_err| match sql_err {
        SqlErr::UniqueConstraintViolation(_) => Some(StoreError::duplicate("session", key)),
        SqlErr::ForeignKeyConstraintViolation(_) => {
            Some(StoreError::dangling("session dimension", key))
        }
        _ => None,
    })
}

fn validate_measures(measures: SessionMeasuresDto) -> Result<SessionMeasuresDto, StoreError> {
    Ok(SessionMeasuresDto {
        buy_in: validate::currency("buy_in", measures.buy_in)?,
        cash_out: validate::currency("cash_out", measures.cash_out)?,
        duration_hours: validate::currency("duration_hours", measures.duration_hours)?,
        drink_money: validate::currency("drink_money", measures.drink_money)?,
        tips: validate::currency("tips", measures.tips)?,
        bonus_money: validate::currency("bonus_money", measures.bonus_money)?,
    })
}
