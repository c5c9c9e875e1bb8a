
use pokerstats_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::model::session::{SessionKey, SessionMeasuresDto};

/// Builds a store holding one room with one table, one user, one date and one
/// time slot: the keys of the standard session are `(1, 1, 20240101, 1900)`.
async fn store_with_dimensions() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_store_tables()
        .with_mock_user("nate")
        .with_mock_room("Bellagio")
        .with_mock_poker_table(1)
        .with_mock_date(20240101)
        .with_mock_time(1900)
        .build()
        .await
}

fn session_key() -> SessionKey {
    SessionKey {
        user_key: 1,
        table_key: 1,
        date_key: 20240101,
        time_key: 1900,
    }
}

fn winning_session() -> SessionMeasuresDto {
    SessionMeasuresDto {
        buy_in: Decimal::new(20_000, 2),
        cash_out: Decimal::new(35_000, 2),
        duration_hours: Decimal::new(350, 2),
        ..Default::default()
    }
}
