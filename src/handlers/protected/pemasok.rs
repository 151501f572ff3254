// handlers/protected/pemasok.rs - /api/pemasok/*

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{
    models::Pemasok,
    scalar::{all_filled, is_filled},
    Call, Scalar,
};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddPemasok {
    pub p_nama_pemasok: Option<Scalar>,
    pub p_kontak_pemasok: Option<Scalar>,
    pub p_alamat_pemasok: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePemasok {
    pub p_id_pemasok: Option<Scalar>,
    pub p_nama_pemasok: Option<Scalar>,
    pub p_kontak_pemasok: Option<Scalar>,
    pub p_alamat_pemasok: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePemasok {
    pub p_id_pemasok: Option<Scalar>,
}

/// GET /api/pemasok/getdatapemasok
pub async fn get_data_pemasok(State(state): State<AppState>) -> Result<Envelope<Vec<Pemasok>>, ApiError> {
    let data = state.procedures.pemasok().await.or_fail("Gagal Get Data Pemasok")?;
    Ok(Envelope::success("Berhasil Get Data Pemasok", data))
}

/// POST /api/pemasok/adddatapemasok
pub async fn add_data_pemasok(
    State(state): State<AppState>,
    body: Result<Json<AddPemasok>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Pemasok";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[&body.p_nama_pemasok, &body.p_kontak_pemasok, &body.p_alamat_pemasok]) {
        return Err(ApiError::fields_required());
    }

    let call = Call::new("sp_pemasok_add")
        .arg(body.p_nama_pemasok)
        .arg(body.p_kontak_pemasok)
        .arg(body.p_alamat_pemasok);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Data Pemasok"))
}

/// POST /api/pemasok/updatedatapemasok
pub async fn update_data_pemasok(
    State(state): State<AppState>,
    body: Result<Json<UpdatePemasok>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Update Data Pemasok";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_pemasok) {
        return Err(ApiError::validation("ID Pemasok Required"));
    }

    let call = Call::new("sp_pemasok_edit")
        .arg(body.p_id_pemasok)
        .arg(body.p_nama_pemasok)
        .arg(body.p_kontak_pemasok)
        .arg(body.p_alamat_pemasok);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Update Data Pemasok"))
}

/// POST /api/pemasok/deletedatapemasok
pub async fn delete_data_pemasok(
    State(state): State<AppState>,
    body: Result<Json<DeletePemasok>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Pemasok";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_pemasok) {
        return Err(ApiError::validation("ID Pemasok Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_pemasok_delete").arg(body.p_id_pemasok))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Pemasok"))
}
