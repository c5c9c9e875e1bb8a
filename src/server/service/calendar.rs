//! Date and time reference data.
//!
//! Rows are produced by the caller (there is no calendar generation here),
//! inserted once with their own keys and only read afterwards.

use chrono::Datelike;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::calendar::{DateDto, TimeDto},
    server::{
        data::calendar::{DateRepository, TimeRepository},
        error::{store::StoreError, Error},
        model::db::{DateModel, TimeModel},
        util::{db::classify_write_error, validate},
    },
};

impl From<DateModel> for DateDto {
    fn from(date: DateModel) -> Self {
        Self {
            date_key: date.date_key,
            full_date: date.full_date,
            day_of_week: date.day_of_week,
            day_num_in_month: date.day_num_in_month,
            day_num_overall: date.day_num_overall,
            day_name: date.day_name,
            day_abbrev: date.day_abbrev,
            weekday_flag: date.weekday_flag,
            week_num_in_year: date.week_num_in_year,
            week_num_overall: date.week_num_overall,
            week_begin_date: date.week_begin_date,
            week_begin_date_key: date.week_begin_date_key,
            month: date.month,
            month_num_overall: date.month_num_overall,
            month_name: date.month_name,
            month_abbrev: date.month_abbrev,
            quarter: date.quarter,
            year: date.year,
            yearmo: date.yearmo,
            last_day_in_month_flag: date.last_day_in_month_flag,
            same_day_year_ago_date: date.same_day_year_ago_date,
        }
    }
}

impl From<DateDto> for DateModel {
    fn from(date: DateDto) -> Self {
        Self {
            date_key: date.date_key,
            full_date: date.full_date,
            day_of_week: date.day_of_week,
            day_num_in_month: date.day_num_in_month,
            day_num_overall: date.day_num_overall,
            day_name: date.day_name,
            day_abbrev: date.day_abbrev,
            weekday_flag: date.weekday_flag,
            week_num_in_year: date.week_num_in_year,
            week_num_overall: date.week_num_overall,
            week_begin_date: date.week_begin_date,
            week_begin_date_key: date.week_begin_date_key,
            month: date.month,
            month_num_overall: date.month_num_overall,
            month_name: date.month_name,
            month_abbrev: date.month_abbrev,
            quarter: date.quarter,
            year: date.year,
            yearmo: date.yearmo,
            last_day_in_month_flag: date.last_day_in_month_flag,
            same_day_year_ago_date: date.same_day_year_ago_date,
        }
    }
}

impl From<TimeModel> for TimeDto {
    fn from(time: TimeModel) -> Self {
        Self {
            time_key: time.time_key,
            hour: time.hour,
            minute: time.minute,
            am_pm: time.am_pm,
            time_of_day: time.time_of_day,
        }
    }
}

impl From<TimeDto> for TimeModel {
    fn from(time: TimeDto) -> Self {
        Self {
            time_key: time.time_key,
            hour: time.hour,
            minute: time.minute,
            am_pm: time.am_pm,
            time_of_day: time.time_of_day,
        }
    }
}

pub struct CalendarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarService<'a> {
    /// Creates a new instance of [`CalendarService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a date row keyed by the `YYYYMMDD` form of its `full_date`
    ///
    /// Only `YYYYMMDD(full_date)` is accepted as `date_key`; any other key is
    /// refused with `InvalidInput`, including keys that are not date shaped.
    ///
    /// # Returns
    /// - `Ok(DateDto)` - The stored row
    /// - `Err(Error::StoreError(DuplicateKeyViolation))` - A row with the same `date_key` exists
    /// - `Err(Error::StoreError(InvalidInput))` - Key does not match `full_date` or oversized text
    /// - `Err(Error::DbErr)` - Database error
    pub async fn insert_date(&self, date: DateDto) -> Result<DateDto, Error> {
        let date = validate_date(date)?;
        let date_key = date.date_key;

        let date_repo = DateRepository::new(self.db);

        if date_repo.get_by_key(date_key).await?.is_some() {
            return Err(StoreError::duplicate("date", date_key).into());
        }

        let date = date_repo.create(date.into()).await.map_err(|err| {
            classify_write_error(err, |sql_err| match sql_err {
                SqlErr::UniqueConstraintViolation(_) => {
                    Some(StoreError::duplicate("date", date_key))
                }
                _ => None,
            })
        })?;

        tracing::debug!(date_key = %date_key, "loaded date {}", date.full_date);

        Ok(date.into())
    }

    /// Loads a time slot row
    ///
    /// # Returns
    /// - `Ok(TimeDto)` - The stored row
    /// - `Err(Error::StoreError(DuplicateKeyViolation))` - A row with the same `time_key` exists
    /// - `Err(Error::StoreError(InvalidInput))` - Hour or minute out of range, or oversized text
    /// - `Err(Error::DbErr)` - Database error
    pub async fn insert_time(&self, time: TimeDto) -> Result<TimeDto, Error> {
        let time = validate_time(time)?;
        let time_key = time.time_key;

        let time_repo = TimeRepository::new(self.db);

        if time_repo.get_by_key(time_key).await?.is_some() {
            return Err(StoreError::duplicate("time", time_key).into());
        }

        let time = time_repo.create(time.into()).await.map_err(|err| {
            classify_write_error(err, |sql_err| match sql_err {
                SqlErr::UniqueConstraintViolation(_) => {
                    Some(StoreError::duplicate("time", time_key))
                }
                _ => None,
            })
        })?;

        tracing::debug!(time_key = %time_key, "loaded time {:02}:{:02}", time.hour, time.minute);

        Ok(time.into())
    }

    pub async fn get_date(&self, date_key: i32) -> Result<DateDto, Error> {
        let date_repo = DateRepository::new(self.db);

        match date_repo.get_by_key(date_key).await? {
            Some(date) => Ok(date.into()),
            None => Err(StoreError::not_found("date", date_key).into()),
        }
    }

    pub async fn get_time(&self, time_key: i32) -> Result<TimeDto, Error> {
        let time_repo = TimeRepository::new(self.db);

        match time_repo.get_by_key(time_key).await? {
            Some(time) => Ok(time.into()),
            None => Err(StoreError::not_found("time", time_key).into()),
        }
    }
}

fn validate_date(date: DateDto) -> Result<DateDto, StoreError> {
    let full_date = date.full_date;
    let expected_key =
        full_date.year() * 10_000 + full_date.month() as i32 * 100 + full_date.day() as i32;

    if date.date_key != expected_key {
        return Err(StoreError::InvalidInput(format!(
            "date_key {} does not match full_date {}, expected {}",
            date.date_key, full_date, expected_key
        )));
    }

    Ok(DateDto {
        day_name: validate::required_text("day_name", &date.day_name, 9)?,
        day_abbrev: validate::required_text("day_abbrev", &date.day_abbrev, 3)?,
        weekday_flag: validate::required_text("weekday_flag", &date.weekday_flag, 1)?,
        month_name: validate::required_text("month_name", &date.month_name, 9)?,
        month_abbrev: validate::required_text("month_abbrev", &date.month_abbrev, 3)?,
        last_day_in_month_flag: validate::required_text(
            "last_day_in_month_flag",
            &date.last_day_in_month_flag,
            1,
        )?,
        ..date
    })
}

fn validate_time(time: TimeDto) -> Result<TimeDto, StoreError> {
    if !(0..24).contains(&time.hour) {
        return Err(StoreError::InvalidInput(format!(
            "hour must be between 0 and 23, got {}",
            time.hour
        )));
    }
    if !(0..60).contains(&time.minute) {
        return Err(StoreError::InvalidInput(format!(
            "minute must be between 0 and 59, got {}",
            time.minute
        )));
    }

    Ok(TimeDto {
        am_pm: validate::required_text("am_pm", &time.am_pm, 2)?,
        time_of_day: validate::bounded_text("time_of_day", &time.time_of_day, 20)?,
        ..time
    })
}
