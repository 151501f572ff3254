// handlers/protected/dashboard.rs - /api/dashboard/*

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::Envelope;
use crate::app::AppState;
use crate::database::{models::Dashboard, Scalar};
use crate::error::{ApiError, OrFail};

/// Reporting period; both fields are handed to the procedures as-is, absent
/// values become NULL.
#[derive(Debug, Default, Deserialize)]
pub struct Periode {
    pub p_periode_bulan: Option<Scalar>,
    pub p_periode_tahun: Option<Scalar>,
}

/// POST /api/dashboard/getdatadashboard
pub async fn get_data_dashboard(
    State(state): State<AppState>,
    body: Result<Json<Periode>, JsonRejection>,
) -> Result<Envelope<Dashboard>, ApiError> {
    const FAILED: &str = "Gagal Get Data Dashboard";
    let Json(periode) = body.or_fail(FAILED)?;

    let data = state
        .procedures
        .dashboard(periode.p_periode_bulan.as_ref(), periode.p_periode_tahun.as_ref())
        .await
        .or_fail(FAILED)?;

    Ok(Envelope::success("Berhasil Get Data", data))
}
