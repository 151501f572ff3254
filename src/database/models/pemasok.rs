use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pemasok {
    pub v_id_pemasok: i64,
    pub v_nama_pemasok: Option<String>,
    pub v_kontak_pemasok: Option<String>,
    pub v_alamat_pemasok: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub v_updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Pemasok {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_pemasok: decode::int(row, 0)?,
            v_nama_pemasok: decode::opt_text(row, 1)?,
            v_kontak_pemasok: decode::opt_text(row, 2)?,
            v_alamat_pemasok: decode::opt_text(row, 3)?,
            v_created_at: decode::opt_datetime(row, 4)?,
            v_updated_at: decode::opt_datetime(row, 5)?,
        })
    }
}
