use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the date dimension, keyed by `YYYYMMDD`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DateDto {
    pub date_key: i32,
    pub full_date: NaiveDate,
    pub day_of_week: i16,
    pub day_num_in_month: i16,
    pub day_num_overall: i32,
    pub day_name: String,
    pub day_abbrev: String,
    pub weekday_flag: String,
    pub week_num_in_year: i16,
    pub week_num_overall: i16,
    pub week_begin_date: NaiveDate,
    pub week_begin_date_key: i32,
    pub month: i16,
    pub month_num_overall: i16,
    pub month_name: String,
    pub month_abbrev: String,
    pub quarter: i16,
    pub year: i16,
    pub yearmo: i32,
    pub last_day_in_month_flag: String,
    pub same_day_year_ago_date: NaiveDate,
}

/// A row of the time dimension
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimeDto {
    pub time_key: i32,
    pub hour: i32,
    pub minute: i32,
    pub am_pm: String,
    pub time_of_day: String,
}
