// handlers/protected/pengguna.rs - /api/pengguna/*
//
// Passwords never reach the database in plain text: add and update store the
// composite digest produced by `auth::hash_password`.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::auth::hash_password;
use crate::database::{
    models::Pengguna,
    scalar::{all_filled, is_filled},
    Call, Scalar,
};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct AddPengguna {
    pub p_nama_pengguna: Option<Scalar>,
    pub p_username_pengguna: Option<Scalar>,
    pub p_password_pengguna: Option<Scalar>,
    pub p_role_pengguna: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePengguna {
    pub p_id_pengguna: Option<Scalar>,
    pub p_nama_pengguna: Option<Scalar>,
    pub p_username_pengguna: Option<Scalar>,
    /// Left out (or empty) to keep the current password.
    pub p_password_pengguna: Option<Scalar>,
    pub p_role_pengguna: Option<Scalar>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePengguna {
    pub p_id_pengguna: Option<Scalar>,
}

fn digest(password: &Option<Scalar>) -> Option<Scalar> {
    password
        .as_ref()
        .filter(|p| !p.is_blank())
        .map(|p| Scalar::Text(hash_password(&p.to_string())))
}

/// GET /api/pengguna/getdatapengguna
pub async fn get_data_pengguna(State(state): State<AppState>) -> Result<Envelope<Vec<Pengguna>>, ApiError> {
    let data = state
        .procedures
        .pengguna()
        .await
        .or_fail("Gagal Get Data Pengguna")?;

    Ok(Envelope::success("Berhasil Get Data Pengguna", data))
}

/// POST /api/pengguna/adddatapengguna
pub async fn add_data_pengguna(
    State(state): State<AppState>,
    body: Result<Json<AddPengguna>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Pengguna";
    let Json(body) = body.or_fail(FAILED)?;

    if !all_filled(&[
        &body.p_nama_pengguna,
        &body.p_username_pengguna,
        &body.p_password_pengguna,
        &body.p_role_pengguna,
    ]) {
        return Err(ApiError::fields_required());
    }

    let call = Call::new("sp_pengguna_add")
        .arg(body.p_nama_pengguna)
        .arg(body.p_username_pengguna)
        .arg(digest(&body.p_password_pengguna))
        .arg(body.p_role_pengguna);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Data Pengguna"))
}

/// POST /api/pengguna/updatedatapengguna
pub async fn update_data_pengguna(
    State(state): State<AppState>,
    body: Result<Json<UpdatePengguna>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Update Data Pengguna";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_pengguna) {
        return Err(ApiError::validation("ID Pengguna Required"));
    }

    let call = Call::new("sp_pengguna_edit")
        .arg(body.p_id_pengguna)
        .arg(body.p_nama_pengguna)
        .arg(body.p_username_pengguna)
        .arg(digest(&body.p_password_pengguna))
        .arg(body.p_role_pengguna);
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Update Data Pengguna"))
}

/// POST /api/pengguna/deletedatapengguna
pub async fn delete_data_pengguna(
    State(state): State<AppState>,
    body: Result<Json<DeletePengguna>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Pengguna";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_pengguna) {
        return Err(ApiError::validation("ID Pengguna Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_pengguna_delete").arg(body.p_id_pengguna))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Pengguna"))
}
