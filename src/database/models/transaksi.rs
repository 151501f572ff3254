use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

/// Transaction header, as returned by `sp_get_all_histori_transaksi` and
/// `sp_get_pengguna_histrori_transaksi`. Monetary columns are truncated to integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaksi {
    pub v_id_transaksi: i64,
    pub v_id_pengguna: i64,
    pub v_nama_pengguna: Option<String>,
    pub v_nama_pelanggan: Option<String>,
    pub v_quantity_transaksi: i64,
    pub v_total_payment: i64,
    pub v_total_price: i64,
    pub v_total_change: i64,
    #[serde(serialize_with = "format::datetime")]
    pub v_date_transaksi: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Transaksi {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_transaksi: decode::int(row, 0)?,
            v_id_pengguna: decode::int(row, 1)?,
            v_nama_pengguna: decode::opt_text(row, 2)?,
            v_nama_pelanggan: decode::opt_text(row, 3)?,
            v_quantity_transaksi: decode::int(row, 4)?,
            v_total_payment: decode::int(row, 5)?,
            v_total_price: decode::int(row, 6)?,
            v_total_change: decode::int(row, 7)?,
            v_date_transaksi: decode::opt_datetime(row, 8)?,
        })
    }
}

/// Line item of `sp_get_all_detail_transaksi`; `v_id_transaksi` is the parent key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTransaksi {
    pub v_id_detail_transaksi: i64,
    pub v_id_transaksi: i64,
    pub v_name_kategori: Option<String>,
    pub v_name_subkategori: Option<String>,
    pub v_name_produk: Option<String>,
    pub v_price_produk: i64,
    pub v_quantity_produk: i64,
}

impl<'r> FromRow<'r, MySqlRow> for DetailTransaksi {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_detail_transaksi: decode::int(row, 0)?,
            v_id_transaksi: decode::int(row, 1)?,
            v_name_kategori: decode::opt_text(row, 2)?,
            v_name_subkategori: decode::opt_text(row, 3)?,
            v_name_produk: decode::opt_text(row, 4)?,
            v_price_produk: decode::int(row, 5)?,
            v_quantity_produk: decode::int(row, 6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransaksiWithDetail {
    #[serde(flatten)]
    pub transaksi: Transaksi,
    pub v_detail_transaksi: Vec<DetailTransaksi>,
}

/// Per-cashier listing; identical to [`Transaksi`] except the date is
/// rendered `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KasirTransaksi {
    pub v_id_transaksi: i64,
    pub v_id_pengguna: i64,
    pub v_nama_pengguna: Option<String>,
    pub v_nama_pelanggan: Option<String>,
    pub v_quantity_transaksi: i64,
    pub v_total_payment: i64,
    pub v_total_price: i64,
    pub v_total_change: i64,
    #[serde(serialize_with = "format::datetime_iso")]
    pub v_date_transaksi: Option<NaiveDateTime>,
}

impl From<Transaksi> for KasirTransaksi {
    fn from(t: Transaksi) -> Self {
        Self {
            v_id_transaksi: t.v_id_transaksi,
            v_id_pengguna: t.v_id_pengguna,
            v_nama_pengguna: t.v_nama_pengguna,
            v_nama_pelanggan: t.v_nama_pelanggan,
            v_quantity_transaksi: t.v_quantity_transaksi,
            v_total_payment: t.v_total_payment,
            v_total_price: t.v_total_price,
            v_total_change: t.v_total_change,
            v_date_transaksi: t.v_date_transaksi,
        }
    }
}
