//! Factory functions for unsaved test models.
//!
//! Surrogate keys are left at 0; fixture helpers clear them before inserting so the
//! database assigns the real key.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::model::{DateModel, PokerTableModel, RoomModel, SessionsFactModel, TimeModel, UserModel};

/// Day counters (`day_num_overall`, `week_num_overall`, `month_num_overall`) start at this date.
const CALENDAR_EPOCH: (i32, u32, u32) = (2000, 1, 1);

pub fn mock_user_model(username: &str) -> UserModel {
    UserModel {
        user_key: 0,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: None,
    }
}

/// A Las Vegas strip room with the provided name.
pub fn mock_room_model(room_name: &str) -> RoomModel {
    RoomModel {
        room_key: 0,
        room_name: room_name.to_string(),
        country: "United States".to_string(),
        country_code: "USA".to_string(),
        state_province: "Nevada".to_string(),
        state_province_code: "NV".to_string(),
        city: "Las Vegas".to_string(),
        postal_code: "89109".to_string(),
        address_line1: "3600 S Las Vegas Blvd".to_string(),
        address_line2: String::new(),
    }
}

/// A 9-seat 1/2 no limit hold'em table.
pub fn mock_poker_table_model(room_key: i32) -> PokerTableModel {
    PokerTableModel {
        table_key: 0,
        room_key,
        max_seats: 9,
        game_type: "NLHE".to_string(),
        limit_type: "No Limit".to_string(),
        small_blind: Decimal::new(100, 2),
        big_blind: Decimal::new(200, 2),
        min_buy_in: Decimal::new(10_000, 2),
        max_buy_in: Decimal::new(30_000, 2),
        dealer_ante: Decimal::new(0, 2),
    }
}

/// Decomposes a `YYYYMMDD` key into a full date dimension row.
///
/// # Panics
/// Panics if `date_key` is not a valid calendar date.
pub fn mock_date_model(date_key: i32) -> DateModel {
    let date = date_from_key(date_key);
    let (epoch_y, epoch_m, epoch_d) = CALENDAR_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(epoch_y, epoch_m, epoch_d).unwrap();

    let day_num_overall = (date - epoch).num_days() as i32 + 1;
    let week_begin_date = date
        .checked_sub_days(Days::new(date.weekday().num_days_from_sunday() as u64))
        .unwrap();
    let is_last_day_in_month = date
        .checked_add_days(Days::new(1))
        .is_none_or(|next| next.month() != date.month());
    let same_day_year_ago_date = date
        .with_year(date.year() - 1)
        .or_else(|| NaiveDate::from_ymd_opt(date.year() - 1, date.month(), date.day() - 1))
        .unwrap();

    DateModel {
        date_key,
        full_date: date,
        day_of_week: date.weekday().number_from_sunday() as i16,
        day_num_in_month: date.day() as i16,
        day_num_overall,
        day_name: date.format("%A").to_string(),
        day_abbrev: date.format("%a").to_string(),
        weekday_flag: flag(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun)),
        week_num_in_year: date.iso_week().week() as i16,
        week_num_overall: ((day_num_overall - 1) / 7 + 1) as i16,
        week_begin_date,
        week_begin_date_key: key_from_date(week_begin_date),
        month: date.month() as i16,
        month_num_overall: ((date.year() - epoch_y) * 12 + date.month() as i32) as i16,
        month_name: date.format("%B").to_string(),
        month_abbrev: date.format("%b").to_string(),
        quarter: ((date.month() - 1) / 3 + 1) as i16,
        year: date.year() as i16,
        yearmo: date.year() * 100 + date.month() as i32,
        last_day_in_month_flag: flag(is_last_day_in_month),
        same_day_year_ago_date,
    }
}

/// Decomposes an `HHMM` key into a time dimension row.
pub fn mock_time_model(time_key: i32) -> TimeModel {
    let hour = time_key / 100;
    let minute = time_key % 100;

    let time_of_day = match hour {
        5..=11 => "Morning",
        12..=16 => "Afternoon",
        17..=20 => "Evening",
        _ => "Night",
    };

    TimeModel {
        time_key,
        hour,
        minute,
        am_pm: if hour < 12 { "AM" } else { "PM" }.to_string(),
        time_of_day: time_of_day.to_string(),
    }
}

/// A winning 3.5 hour session: 200.00 in, 350.00 out.
pub fn mock_session_model(
    user_key: i32,
    table_key: i32,
    date_key: i32,
    time_key: i32,
) -> SessionsFactModel {
    SessionsFactModel {
        user_key,
        table_key,
        date_key,
        time_key,
        buy_in: Decimal::new(20_000, 2),
        cash_out: Decimal::new(35_000, 2),
        duration_hours: Decimal::new(350, 2),
        drink_money: Decimal::new(1_000, 2),
        tips: Decimal::new(1_500, 2),
        bonus_money: Decimal::new(0, 2),
    }
}

fn date_from_key(date_key: i32) -> NaiveDate {
    let year = date_key / 10_000;
    let month = (date_key / 100 % 100) as u32;
    let day = (date_key % 100) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("{} is not a valid YYYYMMDD date key", date_key))
}

fn key_from_date(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

fn flag(value: bool) -> String {
    let flag = if value { "Y" } else { "N" };
    flag.to_string()
}
