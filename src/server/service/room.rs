use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        poker_table::PokerTableDto,
        room::{RoomAttributesDto, RoomDto},
    },
    server::{
        data::{poker_table::PokerTableRepository, room::RoomRepository},
        error::{store::StoreError, Error},
        model::db::RoomModel,
        util::validate,
    },
};

impl From<RoomModel> for RoomDto {
    fn from(room: RoomModel) -> Self {
        Self {
            room_key: room.room_key,
            attributes: RoomAttributesDto {
                room_name: room.room_name,
                country: room.country,
                country_code: room.country_code,
                state_province: room.state_province,
                state_province_code: room.state_province_code,
                city: room.city,
                postal_code: room.postal_code,
                address_line1: room.address_line1,
                address_line2: room.address_line2,
            },
        }
    }
}

/// Service for card rooms, the master data poker tables belong to.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    /// Creates a new instance of [`RoomService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_room(&self, attributes: RoomAttributesDto) -> Result<RoomDto, Error> {
        let attributes = validate_attributes(attributes)?;

        let room_repo = RoomRepository::new(self.db);
        let room = room_repo.create(attributes).await?;

        tracing::info!(room_key = %room.room_key, "created room {}", room.room_name);

        Ok(room.into())
    }

    pub async fn get_room(&self, room_key: i32) -> Result<RoomDto, Error> {
        let room_repo = RoomRepository::new(self.db);

        match room_repo.get_by_key(room_key).await? {
            Some(room) => Ok(room.into()),
            None => Err(StoreError::not_found("room", room_key).into()),
        }
    }

    /// Replaces every descriptive field of a room
    pub async fn update_room(
        &self,
        room_key: i32,
        attributes: RoomAttributesDto,
    ) -> Result<RoomDto, Error> {
        let attributes = validate_attributes(attributes)?;

        let room_repo = RoomRepository::new(self.db);

        match room_repo.update(room_key, attributes).await? {
            Some(room) => Ok(room.into()),
            None => Err(StoreError::not_found("room", room_key).into()),
        }
    }

    /// Lists the tables of a room ordered by key
    ///
    /// # Returns
    /// - `Ok(Vec<PokerTableDto>)` - Tables of the room, empty if it has none
    /// - `Err(Error::StoreError(NotFound))` - No room exists with the provided key
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_room_tables(&self, room_key: i32) -> Result<Vec<PokerTableDto>, Error> {
        let room_repo = RoomRepository::new(self.db);
        let table_repo = PokerTableRepository::new(self.db);

        if room_repo.get_by_key(room_key).await?.is_none() {
            return Err(StoreError::not_found("room", room_key).into());
        }

        let tables = table_repo.get_many_by_room_key(room_key).await?;

        Ok(tables.into_iter().map(PokerTableDto::from).collect())
    }
}

fn validate_attributes(attributes: RoomAttributesDto) -> Result<RoomAttributesDto, StoreError> {
    Ok(RoomAttributesDto {
        room_name: validate::required_text("room_name", &attributes.room_name, 255)?,
        country: validate::bounded_text("country", &attributes.country, 100)?,
        country_code: validate::bounded_text("country_code", &attributes.country_code, 3)?,
        state_province: validate::bounded_text("state_province", &attributes.state_province, 100)?,
        state_province_code: validate::bounded_text(
            "state_province_code",
            &attributes.state_province_code,
            20,
        )?,
        city: validate::bounded_text("city", &attributes.city, 255)?,
        postal_code: validate::bounded_text("postal_code", &attributes.postal_code, 20)?,
        address_line1: validate::bounded_text("address_line1", &attributes.address_line1, 255)?,
        address_line2: validate::bounded_text("address_line2", &attributes.address_line2, 255)?,
    })
}
