// handlers/protected/subkategori.rs - /api/subkategori/*
//
// The mutating routes are also mounted under /api/kategori for older clients.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{models::Subkategori, scalar::{all_filled, is_filled}, Call, Scalar};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddSubkategori {
    pub p_id_kategori: Option<Scalar>,
    pub p_nama_subkategori: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSubkategori {
    pub p_id_subkategori: Option<Scalar>,
    pub p_nama_subkategori: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteSubkategori {
    pub p_id_subkategori: Option<Scalar>,
}

/// GET /api/subkategori/getdatasubkategori
pub async fn get_data_subkategori(State(state): State<AppState>) -> Result<Envelope<Vec<Subkategori>>, ApiError> {
    let data = state
        .procedures
        .subkategori()
        .await
        .or_fail("Gagal Get Data Sub-Kategori")?;

    Ok(Envelope::success("Berhasil Get Data Sub-Kategori", data))
}

/// POST /api/subkategori/adddatasubkategori
pub async fn add_data_subkategori(
    State(state): State<AppState>,
    body: Result<Json<AddSubkategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Sub-Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[&body.p_id_kategori, &body.p_nama_subkategori]) {
        return Err(ApiError::fields_required());
    }

    state
        .procedures
        .execute(
            Call::new("sp_subkategori_add")
                .arg(body.p_id_kategori)
                .arg(body.p_nama_subkategori),
        )
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Data Sub-Kategori"))
}

/// POST /api/subkategori/updatedatasubkategori
pub async fn update_data_subkategori(
    State(state): State<AppState>,
    body: Result<Json<UpdateSubkategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Update Data Sub-Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_subkategori) {
        return Err(ApiError::validation("ID Sub-Kategori Required"));
    }

    state
        .procedures
        .execute(
            Call::new("sp_subkategori_edit")
                .arg(body.p_id_subkategori)
                .arg(body.p_nama_subkategori),
        )
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Update Data Sub-Kategori"))
}

/// POST /api/subkategori/deletedatasubkategori
pub async fn delete_data_subkategori(
    State(state): State<AppState>,
    body: Result<Json<DeleteSubkategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Sub-Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_subkategori) {
        return Err(ApiError::validation("ID Sub-Kategori Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_subkategori_delete").arg(body.p_id_subkategori))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Sub-Kategori"))
}
