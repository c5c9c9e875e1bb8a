pub use sea_orm_migration::prelude::*;

mod m20261019_000001_user_dimension;
mod m20261019_000002_room_dimension;
mod m20261019_000003_poker_table_dimension;
mod m20261019_000004_date_dimension;
mod m20261019_000005_time_dimension;
mod m20261019_000006_sessions_fact;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_user_dimension::Migration),
            Box::new(m20261019_000002_room_dimension::Migration),
            Box::new(m20261019_000003_poker_table_dimension::Migration),
            Box::new(m20261019_000004_date_dimension::Migration),
            Box::new(m20261019_000005_time_dimension::Migration),
            Box::new(m20261019_000006_sessions_fact::Migration),
        ]
    }
}
