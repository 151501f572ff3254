pub mod dashboard;
pub mod kategori;
pub mod laporan_stok;
pub mod log_aktifitas;
pub mod pemasok;
pub mod pengguna;
pub mod produk;
pub mod transaksi;

use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use super::{decode, scalar::Scalar};

pub use dashboard::{Dashboard, DashboardRows};
pub use kategori::{Kategori, KategoriWithSub, Subkategori};
pub use laporan_stok::LaporanStok;
pub use log_aktifitas::LogAktifitas;
pub use pemasok::Pemasok;
pub use pengguna::{Pengguna, PenggunaLogin};
pub use produk::Produk;
pub use transaksi::{DetailTransaksi, KasirTransaksi, Transaksi, TransaksiWithDetail};

/// Two-column `(status, message)` row some procedures return instead of data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub v_status_get: Option<Scalar>,
    pub v_message_get: String,
}

impl<'r> FromRow<'r, MySqlRow> for StatusMessage {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_status_get: decode::scalar(row, 0)?,
            v_message_get: decode::text(row, 1)?,
        })
    }
}
