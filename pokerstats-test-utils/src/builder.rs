//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Methods can be chained together, with all operations queued and executed during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixture rows are inserted in dependency order (users, rooms, tables, dates,
/// times, sessions) regardless of the order the methods are called in. Keys
/// assigned by the database start at 1 for each table, so the nth room
/// declared gets `room_key` n.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_store_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    rooms: Vec<String>,
    poker_tables: Vec<i32>,              // room_key
    dates: Vec<i32>,                     // date_key
    times: Vec<i32>,                     // time_key
    sessions: Vec<(i32, i32, i32, i32)>, // (user_key, table_key, date_key, time_key)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_store_tables: false,
            users: Vec::new(),
            rooms: Vec::new(),
            poker_tables: Vec::new(),
            dates: Vec::new(),
            times: Vec::new(),
            sessions: Vec::new(),
        }
    }

    /// Add all six star schema tables to the test database.
    ///
    /// Creates UserDimension, RoomDimension, PokerTableDimension, DateDimension,
    /// TimeDimension and SessionsFact, in that order so foreign keys resolve.
    pub fn with_store_tables(mut self) -> Self {
        self.include_store_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pokerstats_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pokerstats_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(UserDimension)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user named `username` with email `{username}@example.com`.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a Las Vegas room with the provided name.
    pub fn with_mock_room(mut self, room_name: impl Into<String>) -> Self {
        self.rooms.push(room_name.into());
        self
    }

    /// Insert a 9-seat 1/2 NLHE table in the room with the provided key.
    ///
    /// The room must be declared with `with_mock_room` first.
    pub fn with_mock_poker_table(mut self, room_key: i32) -> Self {
        self.poker_tables.push(room_key);
        self
    }

    /// Insert a date dimension row for a `YYYYMMDD` key.
    pub fn with_mock_date(mut self, date_key: i32) -> Self {
        self.dates.push(date_key);
        self
    }

    /// Insert a time dimension row for an `HHMM` key.
    pub fn with_mock_time(mut self, time_key: i32) -> Self {
        self.times.push(time_key);
        self
    }

    /// Insert a session fact with standard measures.
    ///
    /// All four dimension rows must be declared on the builder as well.
    pub fn with_mock_session(
        mut self,
        user_key: i32,
        table_key: i32,
        date_key: i32,
        time_key: i32,
    ) -> Self {
        self.sessions.push((user_key, table_key, date_key, time_key));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_store_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::UserDimension),
                schema.create_table_from_entity(entity::prelude::RoomDimension),
                schema.create_table_from_entity(entity::prelude::PokerTableDimension),
                schema.create_table_from_entity(entity::prelude::DateDimension),
                schema.create_table_from_entity(entity::prelude::TimeDimension),
                schema.create_table_from_entity(entity::prelude::SessionsFact),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_mock_user(&username).await?;
        }

        for room_name in self.rooms {
            setup.room().insert_mock_room(&room_name).await?;
        }

        for room_key in self.poker_tables {
            setup.room().insert_mock_poker_table(room_key).await?;
        }

        for date_key in self.dates {
            setup.calendar().insert_mock_date(date_key).await?;
        }

        for time_key in self.times {
            setup.calendar().insert_mock_time(time_key).await?;
        }

        for (user_key, table_key, date_key, time_key) in self.sessions {
            setup
                .session()
                .insert_mock_session(user_key, table_key, date_key, time_key)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
