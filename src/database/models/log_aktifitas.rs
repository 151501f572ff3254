use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogAktifitas {
    pub v_id_log: i64,
    pub v_id_pengguna: Option<i64>,
    pub v_nama_pengguna: Option<String>,
    pub v_activity_log: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_date_log: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for LogAktifitas {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_log: decode::int(row, 0)?,
            v_id_pengguna: decode::opt_int(row, 1)?,
            v_nama_pengguna: decode::opt_text(row, 2)?,
            v_activity_log: decode::opt_text(row, 3)?,
            v_date_log: decode::opt_datetime(row, 4)?,
        })
    }
}
