use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomDimension::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomDimension::RoomKey))
                    .col(string_len(RoomDimension::RoomName, 255))
                    .col(string_len(RoomDimension::Country, 100))
                    .col(string_len(RoomDimension::CountryCode, 3))
                    .col(string_len(RoomDimension::StateProvince, 100))
                    .col(string_len(RoomDimension::StateProvinceCode, 20))
                    .col(string_len(RoomDimension::City, 255))
                    .col(string_len(RoomDimension::PostalCode, 20))
                    .col(string_len(RoomDimension::AddressLine1, 255))
                    .col(string_len(RoomDimension::AddressLine2, 255))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomDimension::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RoomDimension {
    Table,
    RoomKey,
    RoomName,
    Country,
    CountryCode,
    StateProvince,
    StateProvinceCode,
    City,
    PostalCode,
    AddressLine1,
    AddressLine2,
}
