use serde::Serialize;

pub const NO_LOW_STOCK: &str = "Tidak Ada Produk dengan Stok Rendah";
pub const NO_BEST_SELLER: &str = "Tidak Ada Produk Terbaik";

/// Monthly summary assembled from five aggregate procedures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub v_total_produk_terjual: Option<i64>,
    pub v_total_transaksi_periode: Option<i64>,
    pub v_total_keuntungan_periode: Option<i64>,
    pub v_produk_stok_rendah: Option<String>,
    pub v_produk_best_seller: Option<String>,
}

/// First column of each procedure's first row.
///
/// The outer `Option` is `None` when the procedure returned no rows, the
/// inner one when the aggregate itself was NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardRows {
    pub total_produk_terjual: Option<Option<i64>>,
    pub total_transaksi_periode: Option<Option<i64>>,
    pub total_keuntungan_periode: Option<Option<i64>>,
    pub produk_stok_rendah: Option<Option<String>>,
    pub produk_best_seller: Option<Option<String>>,
}

impl From<DashboardRows> for Dashboard {
    /// Missing rows fall back to 0 or the "Tidak Ada ..." text; a NULL
    /// aggregate stays `null`.
    fn from(rows: DashboardRows) -> Self {
        Self {
            v_total_produk_terjual: rows.total_produk_terjual.unwrap_or(Some(0)),
            v_total_transaksi_periode: rows.total_transaksi_periode.unwrap_or(Some(0)),
            v_total_keuntungan_periode: rows.total_keuntungan_periode.unwrap_or(Some(0)),
            v_produk_stok_rendah: rows
                .produk_stok_rendah
                .unwrap_or_else(|| Some(NO_LOW_STOCK.to_string())),
            v_produk_best_seller: rows
                .produk_best_seller
                .unwrap_or_else(|| Some(NO_BEST_SELLER.to_string())),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from(DashboardRows::default())
    }
}
