//! Database error classification.
//!
//! Uniqueness and referential integrity are enforced by the storage layer
//! (unique indexes, composite primary key, foreign keys). Services check
//! references up front to produce precise errors, but a concurrent writer can
//! still win the race, in which case the constraint error raised by the
//! database is translated here into the matching [`StoreError`].

use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};

use crate::server::error::{store::StoreError, Error};

/// Translates a constraint violation into a [`StoreError`] and passes any other error through.
///
/// # Arguments
/// - `err` - Error returned by an insert or update
/// - `classify` - Maps the constraint violation reported by the driver onto a store error,
///   returns `None` for violations the caller does not expect
///
/// # Returns
/// - `Error::StoreError` - The database rejected the write because of a known constraint
/// - `Error::DbErr` - Any other database failure
pub fn classify_write_error(
    err: DbErr,
    classify: impl FnOnce(&SqlErr) -> Option<StoreError>,
) -> Error {
    let Some(sql_err) = err.sql_err() else {
        return err.into();
    };

    match classify(&sql_err) {
        Some(store_err) => {
            tracing::warn!(violation = ?sql_err, "write rejected by constraint: {}", store_err);

            store_err.into()
        }
        None => err.into(),
    }
}
