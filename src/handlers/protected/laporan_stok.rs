// handlers/protected/laporan_stok.rs - /api/laporanstok/*
//
// Stock movements are append-only; there is no update route.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{
    models::LaporanStok,
    scalar::{all_filled, is_filled},
    Call, Scalar,
};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddLaporanStok {
    pub p_id_produk: Option<Scalar>,
    pub p_perubahan_stok: Option<Scalar>,
    pub p_aksi_stok: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLaporanStok {
    pub p_id_stok: Option<Scalar>,
}

/// GET /api/laporanstok/getdatalaporanstok
pub async fn get_data_laporan_stok(State(state): State<AppState>) -> Result<Envelope<Vec<LaporanStok>>, ApiError> {
    let data = state
        .procedures
        .laporan_stok()
        .await
        .or_fail("Gagal Get Laporan Stok")?;

    Ok(Envelope::success("Berhasil Get Laporan Stok", data))
}

/// POST /api/laporanstok/adddatalaporanstok
pub async fn add_data_laporan_stok(
    State(state): State<AppState>,
    body: Result<Json<AddLaporanStok>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Laporan Stok";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[&body.p_id_produk, &body.p_perubahan_stok, &body.p_aksi_stok]) {
        return Err(ApiError::fields_required());
    }

    let call = Call::new("sp_laporan_stok_add")
        .arg(body.p_id_produk)
        .arg(body.p_perubahan_stok)
        .arg(body.p_aksi_stok);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Laporan Stok"))
}

/// POST /api/laporanstok/deletedatalaporanstok
pub async fn delete_data_laporan_stok(
    State(state): State<AppState>,
    body: Result<Json<DeleteLaporanStok>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Laporan Stok";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_stok) {
        return Err(ApiError::validation("ID Stok Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_laporan_stok_delete").arg(body.p_id_stok))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Laporan Stok"))
}
