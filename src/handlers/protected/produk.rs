// handlers/protected/produk.rs - /api/produk/*

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{
    models::Produk,
    scalar::{all_filled, is_filled},
    Call, Scalar,
};
use crate::error::{ApiError, OrFail};

#[derive(Debug, Deserialize)]
pub struct ProdukFields {
    pub p_id_kategori: Option<Scalar>,
    pub p_id_subkategori: Option<Scalar>,
    pub p_nama_produk: Option<Scalar>,
    pub p_harga_produk: Option<Scalar>,
    pub p_stok_produk: Option<Scalar>,
}

impl ProdukFields {
    fn all_filled(&self) -> bool {
        all_filled(&[
            &self.p_id_kategori,
            &self.p_id_subkategori,
            &self.p_nama_produk,
            &self.p_harga_produk,
            &self.p_stok_produk,
        ])
    }

    fn push_args(self, call: Call) -> Call {
        call.arg(self.p_id_kategori)
            .arg(self.p_id_subkategori)
            .arg(self.p_nama_produk)
            .arg(self.p_harga_produk)
            .arg(self.p_stok_produk)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProduk {
    pub p_id_produk: Option<Scalar>,
    pub p_id_kategori: Option<Scalar>,
    pub p_id_subkategori: Option<Scalar>,
    pub p_nama_produk: Option<Scalar>,
    pub p_harga_produk: Option<Scalar>,
    pub p_stok_produk: Option<Scalar>,
}

impl UpdateProduk {
    fn into_parts(self) -> (Option<Scalar>, ProdukFields) {
        let fields = ProdukFields {
            p_id_kategori: self.p_id_kategori,
            p_id_subkategori: self.p_id_subkategori,
            p_nama_produk: self.p_nama_produk,
            p_harga_produk: self.p_harga_produk,
            p_stok_produk: self.p_stok_produk,
        };
        (self.p_id_produk, fields)
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteProduk {
    pub p_id_produk: Option<Scalar>,
}

/// GET /api/produk/getdataproduk
pub async fn get_data_produk(State(state): State<AppState>) -> Result<Envelope<Vec<Produk>>, ApiError> {
    let data = state.procedures.produk().await.or_fail("Gagal Get Data Produk")?;
    Ok(Envelope::success("Berhasil Get Data Produk", data))
}

/// POST /api/produk/adddataproduk
pub async fn add_data_produk(
    State(state): State<AppState>,
    body: Result<Json<ProdukFields>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Menambahkan Data Produk";
    let Json(body) = body.or_fail(FAILED)?;

    if !body.all_filled() {
        return Err(ApiError::fields_required());
    }

    let call = body.push_args(Call::new("sp_produk_add"));
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Menambahkan Data Produk"))
}

/// POST /api/produk/updatedataproduk
pub async fn update_data_produk(
    State(state): State<AppState>,
    body: Result<Json<UpdateProduk>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Update Data Produk";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_produk) {
        return Err(ApiError::validation("ID Produk Required"));
    }

    let (id_produk, fields) = body.into_parts();
    let call = fields.push_args(Call::new("sp_produk_edit").arg(id_produk));
    state.procedures.execute(call).await.or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Update Data Produk"))
}

/// POST /api/produk/deletedataproduk
pub async fn delete_data_produk(
    State(state): State<AppState>,
    body: Result<Json<DeleteProduk>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    const FAILED: &str = "Gagal Hapus Data Produk";
    let Json(body) = body.or_fail(FAILED)?;

    if !is_filled(&body.p_id_produk) {
        return Err(ApiError::validation("ID Produk Required"));
    }

    state
        .procedures
        .execute(Call::new("sp_produk_delete").arg(body.p_id_produk))
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::done("Berhasil Hapus Data Produk"))
}
