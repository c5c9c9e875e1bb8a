use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeDimension::Table)
                    .if_not_exists()
                    .col(integer(TimeDimension::TimeKey).primary_key())
                    .col(integer(TimeDimension::Hour))
                    .col(integer(TimeDimension::Minute))
                    .col(string_len(TimeDimension::AmPm, 2))
                    .col(string_len(TimeDimension::TimeOfDay, 20))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeDimension::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimeDimension {
    Table,
    TimeKey,
    Hour,
    Minute,
    AmPm,
    TimeOfDay,
}
