use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_user_dimension::UserDimension,
    m20261019_000003_poker_table_dimension::PokerTableDimension,
    m20261019_000004_date_dimension::DateDimension,
    m20261019_000005_time_dimension::TimeDimension,
};

static PK_SESSIONS_FACT: &str = "pk-sessions_fact";
static IDX_SESSIONS_FACT_TABLE_KEY: &str = "idx-sessions_fact-table_key";
static FK_SESSIONS_FACT_USER_KEY: &str = "fk-sessions_fact-user_key";
static FK_SESSIONS_FACT_TABLE_KEY: &str = "fk-sessions_fact-table_key";
static FK_SESSIONS_FACT_DATE_KEY: &str = "fk-sessions_fact-date_key";
static FK_SESSIONS_FACT_TIME_KEY: &str = "fk-sessions_fact-time_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionsFact::Table)
                    .if_not_exists()
                    .col(integer(SessionsFact::UserKey))
                    .col(integer(SessionsFact::TableKey))
                    .col(integer(SessionsFact::DateKey))
                    .col(integer(SessionsFact::TimeKey))
                    .col(decimal_len(SessionsFact::BuyIn, 10, 2))
                    .col(decimal_len(SessionsFact::CashOut, 10, 2))
                    .col(decimal_len(SessionsFact::DurationHours, 10, 2))
                    .col(decimal_len(SessionsFact::DrinkMoney, 10, 2))
                    .col(decimal_len(SessionsFact::Tips, 10, 2))
                    .col(decimal_len(SessionsFact::BonusMoney, 10, 2))
                    .primary_key(
                        Index::create()
                            .name(PK_SESSIONS_FACT)
                            .col(SessionsFact::UserKey)
                            .col(SessionsFact::TableKey)
                            .col(SessionsFact::DateKey)
                            .col(SessionsFact::TimeKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SESSIONS_FACT_USER_KEY)
                            .from(SessionsFact::Table, SessionsFact::UserKey)
                            .to(UserDimension::Table, UserDimension::UserKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SESSIONS_FACT_TABLE_KEY)
                            .from(SessionsFact::Table, SessionsFact::TableKey)
                            .to(PokerTableDimension::Table, PokerTableDimension::TableKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SESSIONS_FACT_DATE_KEY)
                            .from(SessionsFact::Table, SessionsFact::DateKey)
                            .to(DateDimension::Table, DateDimension::DateKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SESSIONS_FACT_TIME_KEY)
                            .from(SessionsFact::Table, SessionsFact::TimeKey)
                            .to(TimeDimension::Table, TimeDimension::TimeKey),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key index leads with user_key; lookups by table need their own.
        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSIONS_FACT_TABLE_KEY)
                    .table(SessionsFact::Table)
                    .col(SessionsFact::TableKey)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SESSIONS_FACT_TABLE_KEY)
                    .table(SessionsFact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SessionsFact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SessionsFact {
    Table,
    UserKey,
    TableKey,
    DateKey,
    TimeKey,
    BuyIn,
    CashOut,
    DurationHours,
    DrinkMoney,
    Tips,
    BonusMoney,
}
