use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

/// Row of `sp_get_all_product`; the price column is DECIMAL and is sent as an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Produk {
    pub v_id_produk: i64,
    pub v_kategori_produk: Option<String>,
    pub v_subkategori_produk: Option<String>,
    pub v_nama_produk: Option<String>,
    pub v_harga_produk: i64,
    pub v_stok_produk: i64,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub v_updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Produk {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_produk: decode::int(row, 0)?,
            v_kategori_produk: decode::opt_text(row, 1)?,
            v_subkategori_produk: decode::opt_text(row, 2)?,
            v_nama_produk: decode::opt_text(row, 3)?,
            v_harga_produk: decode::int(row, 4)?,
            v_stok_produk: decode::int(row, 5)?,
            v_created_at: decode::opt_datetime(row, 6)?,
            v_updated_at: decode::opt_datetime(row, 7)?,
        })
    }
}
