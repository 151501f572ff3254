// handlers/protected/log_aktifitas.rs - /api/logaktifitas/*

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{
    models::LogAktifitas,
    scalar::{all_filled, is_filled},
    Call, Scalar,
};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddLogAktifitas {
    pub p_id_pengguna: Option<Scalar>,
    pub p_aksi_aktifitas: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLogAktifitas {
    pub p_id_log: Option<Scalar>,
}

/// GET /api/logaktifitas/getdatalogaktifitas
pub async fn get_data_log_aktifitas(State(state): State<AppState>) -> Result<Envelope<Vec<LogAktifitas>>, ApiError> {
    let data = state
        .procedures
        .log_aktifitas()
        .await
        .or_fail("Gagal Get Log Aktifitas")?;

    Ok(Envelope::success("Berhasil Get Log Aktifitas", data))
}

/// POST /api/logaktifitas/adddatalogaktifitas
pub async fn add_data_log_aktifitas(
    State(state): State<AppState>,
    body: Result<Json<AddLogAktifitas>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Add Data Log-Aktifitas";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[&body.p_id_pengguna, &body.p_aksi_aktifitas]) {
        return Err(ApiError::fields_required());
    }

    let call = Call::new("sp_log_add")
        .arg(body.p_id_pengguna)
        .arg(body.p_aksi_aktifitas);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Add Data Log-Aktifitas"))
}

/// POST /api/logaktifitas/deletedatalogaktifitas
pub async fn delete_data_log_aktifitas(
    State(state): State<AppState>,
    body: Result<Json<DeleteLogAktifitas>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Log-Aktifitas";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_log) {
        return Err(ApiError::validation("ID Log Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_log_delete").arg(body.p_id_log))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Log-Aktifitas"))
}
