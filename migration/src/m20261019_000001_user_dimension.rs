use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_DIMENSION_USERNAME: &str = "idx-user_dimension-username";
static IDX_USER_DIMENSION_EMAIL: &str = "idx-user_dimension-email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDimension::Table)
                    .if_not_exists()
                    .col(pk_auto(UserDimension::UserKey))
                    .col(string_len(UserDimension::Username, 64))
                    .col(string_len(UserDimension::Email, 120))
                    .col(string_len_null(UserDimension::PasswordHash, 256))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_DIMENSION_USERNAME)
                    .table(UserDimension::Table)
                    .col(UserDimension::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_DIMENSION_EMAIL)
                    .table(UserDimension::Table)
                    .col(UserDimension::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_DIMENSION_EMAIL)
                    .table(UserDimension::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_DIMENSION_USERNAME)
                    .table(UserDimension::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserDimension::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserDimension {
    Table,
    UserKey,
    Username,
    Email,
    PasswordHash,
}
