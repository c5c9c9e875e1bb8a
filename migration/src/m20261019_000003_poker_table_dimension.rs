use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_room_dimension::RoomDimension;

static IDX_POKER_TABLE_DIMENSION_ROOM_KEY: &str = "idx-poker_table_dimension-room_key";
static FK_POKER_TABLE_DIMENSION_ROOM_KEY: &str = "fk-poker_table_dimension-room_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the migration also runs on SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(PokerTableDimension::Table)
                    .if_not_exists()
                    .col(pk_auto(PokerTableDimension::TableKey))
                    .col(integer(PokerTableDimension::RoomKey))
                    .col(integer(PokerTableDimension::MaxSeats))
                    .col(string_len(PokerTableDimension::GameType, 50))
                    .col(string_len(PokerTableDimension::LimitType, 50))
                    .col(decimal_len(PokerTableDimension::SmallBlind, 10, 2))
                    .col(decimal_len(PokerTableDimension::BigBlind, 10, 2))
                    .col(decimal_len(PokerTableDimension::MinBuyIn, 10, 2))
                    .col(decimal_len(PokerTableDimension::MaxBuyIn, 10, 2))
                    .col(decimal_len(PokerTableDimension::DealerAnte, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKER_TABLE_DIMENSION_ROOM_KEY)
                            .from(PokerTableDimension::Table, PokerTableDimension::RoomKey)
                            .to(RoomDimension::Table, RoomDimension::RoomKey),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKER_TABLE_DIMENSION_ROOM_KEY)
                    .table(PokerTableDimension::Table)
                    .col(PokerTableDimension::RoomKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKER_TABLE_DIMENSION_ROOM_KEY)
                    .table(PokerTableDimension::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokerTableDimension::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokerTableDimension {
    Table,
    TableKey,
    RoomKey,
    MaxSeats,
    GameType,
    LimitType,
    SmallBlind,
    BigBlind,
    MinBuyIn,
    MaxBuyIn,
    DealerAnte,
}
