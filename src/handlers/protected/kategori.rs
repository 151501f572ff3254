// handlers/protected/kategori.rs - /api/kategori/*
//
// The listing nests each category's subcategories under `v_subkategori`.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::{nest, Envelope};
use crate::app::AppState;
use crate::database::{models::KategoriWithSub, scalar::{all_filled, is_filled}, Call, Scalar};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddKategori {
    pub p_nama_kategori: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateKategori {
    pub p_id_kategori: Option<Scalar>,
    pub p_nama_kategori: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteKategori {
    pub p_id_kategori: Option<Scalar>,
}

/// GET /api/kategori/getdatakategori
pub async fn get_data_kategori(State(state): State<AppState>) -> Result<Envelope<Vec<KategoriWithSub>>, ApiError> {
    const FAILED: &str = "Gagal Get Data Kategori";

    let kategori = state.procedures.kategori().await.or_fail(FAILED)?;
    let subkategori = state.procedures.subkategori().await.or_fail(FAILED)?;

    let data = nest(
        kategori,
        &subkategori,
        |k| k.id_kategori,
        |s| s.id_kategori,
        |kategori, v_subkategori| KategoriWithSub { kategori, v_subkategori },
    );

    Ok(Envelope::success("Berhasil Get Data Kategori", data))
}

/// POST /api/kategori/adddatakategori
pub async fn add_data_kategori(
    State(state): State<AppState>,
    body: Result<Json<AddKategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[&body.p_nama_kategori]) {
        return Err(ApiError::fields_required());
    }

    state
        .procedures
        .execute(Call::new("sp_kategori_add").arg(body.p_nama_kategori))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Data Kategori"))
}

/// POST /api/kategori/updatedatakategori
pub async fn update_data_kategori(
    State(state): State<AppState>,
    body: Result<Json<UpdateKategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Update Data Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_kategori) {
        return Err(ApiError::validation("ID Kategori Required"));
    }

    state
        .procedures
        .execute(
            Call::new("sp_kategori_edit")
                .arg(body.p_id_kategori)
                .arg(body.p_nama_kategori),
        )
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Update Data Kategori"))
}

/// POST /api/kategori/deletedatakategori
pub async fn delete_data_kategori(
    State(state): State<AppState>,
    body: Result<Json<DeleteKategori>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Kategori";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_kategori) {
        return Err(ApiError::validation("ID Kategori Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_kategori_delete").arg(body.p_id_kategori))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Kategori"))
}
