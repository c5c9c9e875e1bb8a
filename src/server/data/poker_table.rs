use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::poker_table::PokerTableAttributesDto, server::model::db::PokerTableModel};

pub struct PokerTableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokerTableRepository<'a, C> {
    /// Creates a new instance of [`PokerTableRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a table in the provided room
    ///
    /// The room is not checked here; a dangling `room_key` surfaces as a foreign
    /// key violation from the database.
    pub async fn create(
        &self,
        room_key: i32,
        attributes: PokerTableAttributesDto,
    ) -> Result<PokerTableModel, DbErr> {
        let table = Self::with_attributes(
            entity::poker_table_dimension::ActiveModel {
                room_key: ActiveValue::Set(room_key),
                ..Default::default()
            },
            attributes,
        );

        table.insert(self.db).await
    }

    pub async fn get_by_key(&self, table_key: i32) -> Result<Option<PokerTableModel>, DbErr> {
        entity::prelude::PokerTableDimension::find_by_id(table_key)
            .one(self.db)
            .await
    }

    /// Gets every table of a room ordered by key
    pub async fn get_many_by_room_key(&self, room_key: i32) -> Result<Vec<PokerTableModel>, DbErr> {
        entity::prelude::PokerTableDimension::find()
            .filter(entity::poker_table_dimension::Column::RoomKey.eq(room_key))
            .order_by_asc(entity::poker_table_dimension::Column::TableKey)
            .all(self.db)
            .await
    }

    /// Replaces the seating and stakes of a table, its room is kept
    ///
    /// # Returns
    /// - `Ok(Some(PokerTableModel))` - The updated table
    /// - `Ok(None)` - No table exists with the provided key
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        table_key: i32,
        attributes: PokerTableAttributesDto,
    ) -> Result<Option<PokerTableModel>, DbErr> {
        if self.get_by_key(table_key).await?.is_none() {
            return Ok(None);
        }

        let table = Self::with_attributes(
            entity::poker_table_dimension::ActiveModel {
                table_key: ActiveValue::Unchanged(table_key),
                ..Default::default()
            },
            attributes,
        );

        let table = table.update(self.db).await?;

        Ok(Some(table))
    }

    fn with_attributes(
        mut table: entity::poker_table_dimension::ActiveModel,
        attributes: PokerTableAttributesDto,
    ) -> entity::poker_table_dimension::ActiveModel {
        table.max_seats = ActiveValue::Set(attributes.max_seats);
        table.game_type = ActiveValue::Set(attributes.game_type);
        table.limit_type = ActiveValue::Set(attributes.limit_type);
        table.small_blind = ActiveValue::Set(attributes.small_blind);
        table.big_blind = ActiveValue::Set(attributes.big_blind);
        table.min_buy_in = ActiveValue::Set(attributes.min_buy_in);
        table.max_buy_in = ActiveValue::Set(attributes.max_buy_in);
        table.dealer_ante = ActiveValue::Set(attributes.dealer_ante);
        table
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::model::poker_table::PokerTableAttributesDto;

    fn attributes(max_seats: i32) -> PokerTableAttributesDto {
        PokerTableAttributesDto {
            max_seats,
            game_type: "NLHE".to_string(),
            limit_type: "No Limit".to_string(),
            small_blind: Decimal::new(100, 2),
            big_blind: Decimal::new(200, 2),
            min_buy_in: Decimal::new(10_000, 2),
            max_buy_in: Decimal::new(30_000, 2),
            dealer_ante: Decimal::ZERO,
        }
    }

    mod create {
        use pokerstats_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use super::attributes;
        use crate::server::data::poker_table::PokerTableRepository;

        /// Expect success when creating a table in an existing room
        #[tokio::test]
        async fn creates_table_in_room() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_store_tables()
                .with_mock_room("Bellagio")
                .build()
                .await?;

            let table_repo = PokerTableRepository::new(&test.db);
            let table = table_repo.create(1, attributes(9)).await?;

            assert_eq!(table.room_key, 1);
            assert_eq!(table.max_seats, 9);
            assert_eq!(table.big_blind, Decimal::new(200, 2));

            Ok(())
        }

        /// Expect Error when the room does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_room() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;

            let table_repo = PokerTableRepository::new(&test.db);
            let result = table_repo.create(1, attributes(9)).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_many_by_room_key {
        use pokerstats_test_utils::prelude::*;

        use crate::server::data::poker_table::PokerTableRepository;

        /// Expect only the tables of the requested room
        #[tokio::test]
        async fn returns_tables_of_room() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_store_tables()
                .with_mock_room("Bellagio")
                .with_mock_room("Aria")
                .with_mock_poker_table(1)
                .with_mock_poker_table(2)
                .with_mock_poker_table(1)
                .build()
                .await?;

            let table_repo = PokerTableRepository::new(&test.db);
            let tables = table_repo.get_many_by_room_key(1).await?;

            let keys: Vec<i32> = tables.iter().map(|t| t.table_key).collect();
            assert_eq!(keys, vec![1, 3]);

            Ok(())
        }
    }

    mod update {
        use pokerstats_test_utils::prelude::*;

        use super::attributes;
        use crate::server::data::poker_table::PokerTableRepository;

        /// Expect the new stakes to be stored and the room to be kept
        #[tokio::test]
        async fn updates_existing_table() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_store_tables()
                .with_mock_room("Bellagio")
                .with_mock_poker_table(1)
                .build()
                .await?;

            let table_repo = PokerTableRepository::new(&test.db);
            let updated = table_repo.update(1, attributes(6)).await?.unwrap();

            assert_eq!(updated.max_seats, 6);
            assert_eq!(updated.room_key, 1);

            Ok(())
        }
    }
}
