use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

/// Row of `sp_get_all_laporan_stok`. `aksi_stok` is the movement kind
/// (stock in / stock out) as stored by the procedure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaporanStok {
    pub id_stok: i64,
    pub nama_produk: Option<String>,
    pub stok_semula: i64,
    pub perubahan_stok: i64,
    pub aksi_stok: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for LaporanStok {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id_stok: decode::int(row, 0)?,
            nama_produk: decode::opt_text(row, 1)?,
            stok_semula: decode::int(row, 2)?,
            perubahan_stok: decode::int(row, 3)?,
            aksi_stok: decode::opt_text(row, 4)?,
            v_created_at: decode::opt_datetime(row, 5)?,
        })
    }
}
