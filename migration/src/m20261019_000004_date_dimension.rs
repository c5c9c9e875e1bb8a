use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DateDimension::Table)
                    .if_not_exists()
                    .col(integer(DateDimension::DateKey).primary_key())
                    .col(date(DateDimension::FullDate))
                    .col(small_integer(DateDimension::DayOfWeek))
                    .col(small_integer(DateDimension::DayNumInMonth))
                    .col(integer(DateDimension::DayNumOverall))
                    .col(string_len(DateDimension::DayName, 9))
                    .col(char_len(DateDimension::DayAbbrev, 3))
                    .col(char_len(DateDimension::WeekdayFlag, 1))
                    .col(small_integer(DateDimension::WeekNumInYear))
                    .col(small_integer(DateDimension::WeekNumOverall))
                    .col(date(DateDimension::WeekBeginDate))
                    .col(integer(DateDimension::WeekBeginDateKey))
                    .col(small_integer(DateDimension::Month))
                    .col(small_integer(DateDimension::MonthNumOverall))
                    .col(string_len(DateDimension::MonthName, 9))
                    .col(char_len(DateDimension::MonthAbbrev, 3))
                    .col(small_integer(DateDimension::Quarter))
                    .col(small_integer(DateDimension::Year))
                    .col(integer(DateDimension::Yearmo))
                    .col(char_len(DateDimension::LastDayInMonthFlag, 1))
                    .col(date(DateDimension::SameDayYearAgoDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DateDimension::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DateDimension {
    Table,
    DateKey,
    FullDate,
    DayOfWeek,
    DayNumInMonth,
    DayNumOverall,
    DayName,
    DayAbbrev,
    WeekdayFlag,
    WeekNumInYear,
    WeekNumOverall,
    WeekBeginDate,
    WeekBeginDateKey,
    Month,
    MonthNumOverall,
    MonthName,
    MonthAbbrev,
    Quarter,
    Year,
    Yearmo,
    LastDayInMonthFlag,
    SameDayYearAgoDate,
}
