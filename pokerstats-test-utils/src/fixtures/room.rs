use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{PokerTableModel, RoomModel},
    TestContext,
};

impl TestContext {
    pub fn room<'a>(&'a self) -> RoomFixtures<'a> {
        RoomFixtures { setup: self }
    }
}

pub struct RoomFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RoomFixtures<'a> {
    pub async fn insert_mock_room(&self, room_name: &str) -> Result<RoomModel, TestError> {
        let mut room = factory::mock_room_model(room_name)
            .into_active_model()
            .reset_all();
        room.room_key = ActiveValue::NotSet;

        Ok(room.insert(&self.setup.db).await?)
    }

    /// Inserts a table in an existing room
    pub async fn insert_mock_poker_table(
        &self,
        room_key: i32,
    ) -> Result<PokerTableModel, TestError> {
        let mut table = factory::mock_poker_table_model(room_key)
            .into_active_model()
            .reset_all();
        table.table_key = ActiveValue::NotSet;

        Ok(table.insert(&self.setup.db).await?)
    }

    /// Inserts a room along with a single table inside it
    pub async fn insert_mock_room_with_table(
        &self,
        room_name: &str,
    ) -> Result<(RoomModel, PokerTableModel), TestError> {
        let room = self.insert_mock_room(room_name).await?;
        let table = self.insert_mock_poker_table(room.room_key).await?;

        Ok((room, table))
    }
}
