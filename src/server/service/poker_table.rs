use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::poker_table::{PokerTableAttributesDto, PokerTableDto},
    server::{
        data::{poker_table::PokerTableRepository, room::RoomRepository},
        error::{store::StoreError, Error},
        model::db::PokerTableModel,
        util::{db::classify_write_error, validate},
    },
};

impl From<PokerTableModel> for PokerTableDto {
    fn from(table: PokerTableModel) -> Self {
        Self {
            table_key: table.table_key,
            room_key: table.room_key,
            attributes: PokerTableAttributesDto {
                max_seats: table.max_seats,
                game_type: table.game_type,
                limit_type: table.limit_type,
                small_blind: table.small_blind,
                big_blind: table.big_blind,
                min_buy_in: table.min_buy_in,
                max_buy_in: table.max_buy_in,
                dealer_ante: table.dealer_ante,
            },
        }
    }
}

/// Service for poker tables. Every table belongs to exactly one room.
pub struct PokerTableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokerTableService<'a> {
    /// Creates a new instance of [`PokerTableService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a table in an existing room
    ///
    /// # Returns
    /// - `Ok(PokerTableDto)` - The created table with its database assigned key
    /// - `Err(Error::StoreError(ReferentialIntegrityViolation))` - The room does not exist
    /// - `Err(Error::StoreError(InvalidInput))` - Invalid seating, stakes or oversized text
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_poker_table(
        &self,
        room_key: i32,
        attributes: PokerTableAttributesDto,
    ) -> Result<PokerTableDto, Error> {
        let attributes = validate_attributes(attributes)?;

        let room_repo = RoomRepository::new(self.db);
        let table_repo = PokerTableRepository::new(self.db);

        if room_repo.get_by_key(room_key).await?.is_none() {
            return Err(StoreError::dangling("room", room_key).into());
        }

        let table = table_repo
            .create(room_key, attributes)
            .await
            .map_err(|err| {
                classify_write_error(err, |sql_err| match sql_err {
                    SqlErr::ForeignKeyConstraintViolation(_) => {
                        Some(StoreError::dangling("room", room_key))
                    }
                    _ => None,
                })
            })?;

        tracing::info!(
            table_key = %table.table_key,
            room_key = %table.room_key,
            "created {} table", table.game_type
        );

        Ok(table.into())
    }

    pub async fn get_poker_table(&self, table_key: i32) -> Result<PokerTableDto, Error> {
        let table_repo = PokerTableRepository::new(self.db);

        match table_repo.get_by_key(table_key).await? {
            Some(table) => Ok(table.into()),
            None => Err(StoreError::not_found("poker table", table_key).into()),
        }
    }

    /// Replaces the seating and stakes of a table, its room is kept
    pub async fn update_poker_table(
        &self,
        table_key: i32,
        attributes: PokerTableAttributesDto,
    ) -> Result<PokerTableDto, Error> {
        let attributes = validate_attributes(attributes)?;

        let table_repo = PokerTableRepository::new(self.db);

        match table_repo.update(table_key, attributes).await? {
            Some(table) => Ok(table.into()),
            None => Err(StoreError::not_found("poker table", table_key).into()),
        }
    }
}

fn validate_attributes(
    attributes: PokerTableAttributesDto,
) -> Result<PokerTableAttributesDto, StoreError> {
    if attributes.max_seats < 1 {
        return Err(StoreError::InvalidInput(
            "max_seats must be at least 1".to_string(),
        ));
    }

    Ok(PokerTableAttributesDto {
        max_seats: attributes.max_seats,
        game_type: validate::required_text("game_type", &attributes.game_type, 50)?,
        limit_type: validate::required_text("limit_type", &attributes.limit_type, 50)?,
        small_blind: validate::currency("small_blind", attributes.small_blind)?,
        big_blind: validate::currency("big_blind", attributes.big_blind)?,
        min_buy_in: validate::currency("min_buy_in", attributes.min_buy_in)?,
        max_buy_in: validate::currency("max_buy_in", attributes.max_buy_in)?,
        dealer_ante: validate::currency("dealer_ante", attributes.dealer_ante)?,
    })
}

#[cfg(test)]
mod tests {
    use pokerstats_test_utils::prelude::*;
    use rust_decimal::Decimal;

    use crate::{
        model::poker_table::{PokerTableAttributesDto, PokerTableDto},
        server::{
            error::{store::StoreError, Error},
            service::poker_table::PokerTableService,
        },
    };

    fn attributes() -> PokerTableAttributesDto {
        PokerTableDto::from(factory::mock_poker_table_model(0)).attributes
    }

    /// Expect a table created in an existing room to be readable by its key
    #[tokio::test]
    async fn creates_and_gets_table() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_mock_room("Bellagio")
            .build()
            .await?;

        let table_service = PokerTableService::new(&test.db);
        let created = table_service
            .create_poker_table(1, attributes())
            .await
            .unwrap();
        let found = table_service
            .get_poker_table(created.table_key)
            .await
            .unwrap();

        assert_eq!(found.room_key, 1);
        assert_eq!(found.attributes.game_type, "NLHE");
        assert_eq!(found.attributes.big_blind, Decimal::new(200, 2));

        Ok(())
    }

    /// Expect ReferentialIntegrityViolation naming the room when it does not exist
    #[tokio::test]
    async fn fails_for_dangling_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;

        let table_service = PokerTableService::new(&test.db);
        let result = table_service.create_poker_table(7, attributes()).await;

        match result {
            Err(Error::StoreError(err)) => assert_eq!(err, StoreError::dangling("room", 7)),
            other => panic!("expected ReferentialIntegrityViolation, got {:?}", other),
        }

        Ok(())
    }

    /// Expect blinds to be rounded to cents before storing
    #[tokio::test]
    async fn rounds_stakes_to_cents() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_mock_room("Bellagio")
            .build()
            .await?;

        let mut table = attributes();
        table.small_blind = Decimal::new(1_005, 3); // 1.005

        let table_service = PokerTableService::new(&test.db);
        let created = table_service.create_poker_table(1, table).await.unwrap();

        assert_eq!(created.attributes.small_blind, Decimal::new(101, 2));

        Ok(())
    }

    /// Expect InvalidInput for a table without seats
    #[tokio::test]
    async fn fails_for_zero_seats() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_mock_room("Bellagio")
            .build()
            .await?;

        let mut table = attributes();
        table.max_seats = 0;

        let table_service = PokerTableService::new(&test.db);
        let result = table_service.create_poker_table(1, table).await;

        assert!(matches!(
            result,
            Err(Error::StoreError(StoreError::InvalidInput(_)))
        ));

        Ok(())
    }

    /// Expect the stakes to change while the table stays in its room
    #[tokio::test]
    async fn updates_table_in_place() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_store_tables()
            .with_mock_room("Bellagio")
            .with_mock_poker_table(1)
            .build()
            .await?;

        let mut table = attributes();
        table.small_blind = Decimal::new(200, 2);
        table.big_blind = Decimal::new(500, 2);

        let table_service = PokerTableService::new(&test.db);
        let updated = table_service.update_poker_table(1, table).await.unwrap();

        assert_eq!(updated.room_key, 1);
        assert_eq!(updated.attributes.big_blind, Decimal::new(500, 2));

        Ok(())
    }

    /// Expect NotFound for a table key that does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_table() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;

        let table_service = PokerTableService::new(&test.db);

        assert!(matches!(
            table_service.get_poker_table(1).await,
            Err(Error::StoreError(StoreError::NotFound { entity: "poker table", .. }))
        ));
        assert!(matches!(
            table_service.update_poker_table(1, attributes()).await,
            Err(Error::StoreError(StoreError::NotFound { entity: "poker table", .. }))
        ));

        Ok(())
    }
}
