use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{model::room::RoomAttributesDto, server::model::db::RoomModel};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new room, the `room_key` is assigned by the database
    pub async fn create(&self, attributes: RoomAttributesDto) -> Result<RoomModel, DbErr> {
        let room = Self::with_attributes(Default::default(), attributes);

        room.insert(self.db).await
    }

    pub async fn get_by_key(&self, room_key: i32) -> Result<Option<RoomModel>, DbErr> {
        entity::prelude::RoomDimension::find_by_id(room_key)
            .one(self.db)
            .await
    }

    /// Replaces every descriptive field of a room
    ///
    /// # Returns
    /// - `Ok(Some(RoomModel))` - The updated room
    /// - `Ok(None)` - No room exists with the provided key
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        room_key: i32,
        attributes: RoomAttributesDto,
    ) -> Result<Option<RoomModel>, DbErr> {
        if self.get_by_key(room_key).await?.is_none() {
            return Ok(None);
        }

        let room = Self::with_attributes(
            entity::room_dimension::ActiveModel {
                room_key: ActiveValue::Unchanged(room_key),
                ..Default::default()
            },
            attributes,
        );

        let room = room.update(self.db).await?;

        Ok(Some(room))
    }

    fn with_attributes(
        mut room: entity::room_dimension::ActiveModel,
        attributes: RoomAttributesDto,
    ) -> entity::room_dimension::ActiveModel {
        room.room_name = ActiveValue::Set(attributes.room_name);
        room.country = ActiveValue::Set(attributes.country);
        room.country_code = ActiveValue::Set(attributes.country_code);
        room.state_province = ActiveValue::Set(attributes.state_province);
        room.state_province_code = ActiveValue::Set(attributes.state_province_code);
        room.city = ActiveValue::Set(attributes.city);
        room.postal_code = ActiveValue::Set(attributes.postal_code);
        room.address_line1 = ActiveValue::Set(attributes.address_line1);
        room.address_line2 = ActiveValue::Set(attributes.address_line2);
        room
    }
}
