// handlers/protected/transaksi.rs - /api/transaksi/*
//
// The full history nests each transaction's line items under
// `v_detail_transaksi`; the per-cashier history is flat.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::{nest, Envelope};
use crate::app::AppState;
use crate::database::{
    models::{KasirTransaksi, TransaksiWithDetail},
    scalar::all_filled,
    Call, KasirHistory, Scalar,
};
use crate::error::{ApiError, OrFail};

const FAILED_FETCH: &str = "Gagal Mengambil Data Transaksi";

#[derive(Debug, Deserialize)]
pub struct KasirRequest {
    pub p_id_pengguna: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct AddTransaksi {
    pub p_id_pengguna: Option<Scalar>,
    pub p_nama_pelanggan: Option<Scalar>,
    pub p_total_payment: Option<Scalar>,
    #[serde(default)]
    pub p_detail_transaksi: Vec<AddDetailTransaksi>,
}

#[derive(Debug, Deserialize)]
pub struct AddDetailTransaksi {
    pub p_id_produk: Option<Scalar>,
    pub p_quantity_produk: Option<Scalar>,
}

impl AddTransaksi {
    /// Header fields plus at least one line, every line complete.
    /// The customer name is optional.
    fn is_complete(&self) -> bool {
        all_filled(&[&self.p_id_pengguna, &self.p_total_payment])
            && !self.p_detail_transaksi.is_empty()
            && self
                .p_detail_transaksi
                .iter()
                .all(|line| all_filled(&[&line.p_id_produk, &line.p_quantity_produk]))
    }
}

/// GET /api/transaksi/getalldatatransaksi
pub async fn get_all_data_transaksi(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<TransaksiWithDetail>>, ApiError> {
    let transaksi = state.procedures.transaksi().await.or_fail(FAILED_FETCH)?;
    let detail = state.procedures.detail_transaksi().await.or_fail(FAILED_FETCH)?;

    let data = nest(
        transaksi,
        &detail,
        |t| t.v_id_transaksi,
        |d| d.v_id_transaksi,
        |transaksi, v_detail_transaksi| TransaksiWithDetail { transaksi, v_detail_transaksi },
    );

    Ok(Envelope::success("Berhasil Mengambil Data Transaksi", data))
}

/// POST /api/transaksi/getdatatransaksibykasir
pub async fn get_data_transaksi_by_kasir(
    State(state): State<AppState>,
    body: Result<Json<KasirRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.or_fail(FAILED_FETCH)?;

    let Some(id_pengguna) = body.p_id_pengguna.filter(|id| !id.is_blank()) else {
        return Err(ApiError::validation("p_id_pengguna tidak disediakan"));
    };

    let history = state
        .procedures
        .transaksi_by_kasir(&id_pengguna)
        .await
        .or_fail(FAILED_FETCH)?;

    let response = match history {
        KasirHistory::Empty => {
            return Err(ApiError::failed(FAILED_FETCH, "Tidak ada hasil dari stored procedure"));
        }
        KasirHistory::Status(status) => {
            let message = status.v_message_get.clone();
            Envelope::success(message, vec![status]).into_response()
        }
        KasirHistory::Rows(rows) => {
            let message = match rows.first() {
                Some(first) => format!(
                    "Berhasil Mengambil Data Transaksi By {}",
                    first.v_nama_pengguna.as_deref().unwrap_or_default()
                ),
                None => "Tidak ada data transaksi untuk pengguna ini.".to_string(),
            };
            let data: Vec<KasirTransaksi> = rows.into_iter().map(KasirTransaksi::from).collect();
            Envelope::success(message, data).into_response()
        }
    };

    Ok(response)
}

/// POST /api/transaksi/adddatatransaksi
///
/// Header and lines commit together; the new id is returned as
/// `data: [{"v_id_transaksi": ..}]`.
pub async fn add_data_transaksi(
    State(state): State<AppState>,
    body: Result<Json<AddTransaksi>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Transaksi";
    let Json(body) = body.or_fail(FAILED)?;

    if !body.is_complete() {
        return Err(ApiError::fields_required());
    }

    let header = Call::new("sp_transaksi_add")
        .arg(body.p_id_pengguna)
        .arg(body.p_nama_pelanggan)
        .arg(body.p_total_payment);
    let lines = body
        .p_detail_transaksi
        .into_iter()
        .map(|line| {
            Call::new("sp_detail_transaksi_add")
                .arg(line.p_id_produk)
                .arg(line.p_quantity_produk)
        })
        .collect();

    let id_transaksi = state
        .procedures
        .add_transaksi(header, lines)
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::success(
        "Berhasil Menambahkan Data Transaksi",
        vec![json!({ "v_id_transaksi": id_transaksi })],
    ))
}
