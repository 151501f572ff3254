//! Positional column readers.
//!
//! Procedures return integer columns as INT, BIGINT, UNSIGNED or DECIMAL
//! depending on how they were computed (SUM and arithmetic widen to DECIMAL),
//! so integers are read leniently and truncated toward zero.

use chrono::NaiveDateTime;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sqlx::{mysql::MySqlRow, Row, ValueRef};

use super::scalar::Scalar;

pub fn int(row: &MySqlRow, index: usize) -> Result<i64, sqlx::Error> {
    opt_int(row, index)?.ok_or_else(|| decode_error(index, "unexpected NULL"))
}

pub fn opt_int(row: &MySqlRow, index: usize) -> Result<Option<i64>, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(None);
    }
    if let Ok(v) = row.try_get::<i64, _>(index) {
        return Ok(Some(v));
    }
    if let Ok(v) = row.try_get::<u64, _>(index) {
        return i64::try_from(v)
            .map(Some)
            .map_err(|e| decode_error(index, &e.to_string()));
    }
    if let Ok(v) = row.try_get::<f64, _>(index) {
        return Ok(Some(v.trunc() as i64));
    }
    let v: Decimal = row.try_get(index)?;
    v.trunc()
        .to_i64()
        .map(Some)
        .ok_or_else(|| decode_error(index, "decimal out of range"))
}

/// NULL reads as `""`; only for columns that become a response message.
pub fn text(row: &MySqlRow, index: usize) -> Result<String, sqlx::Error> {
    Ok(opt_text(row, index)?.unwrap_or_default())
}

pub fn opt_text(row: &MySqlRow, index: usize) -> Result<Option<String>, sqlx::Error> {
    row.try_get(index)
}

pub fn opt_datetime(row: &MySqlRow, index: usize) -> Result<Option<NaiveDateTime>, sqlx::Error> {
    row.try_get(index)
}

/// Whatever the column holds, as an integer when it is one and text otherwise.
pub fn scalar(row: &MySqlRow, index: usize) -> Result<Option<Scalar>, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(None);
    }
    if let Ok(v) = opt_int(row, index) {
        return Ok(v.map(Scalar::Int));
    }
    Ok(opt_text(row, index)?.map(Scalar::Text))
}

fn decode_error(index: usize, message: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: message.to_string().into(),
    }
}
