// handlers/public/login.rs - POST /api/login
//
// Credentials are checked by `sp_login_retiel` against the stored digest. The
// procedure either answers with the matching user rows or with a single
// `(status, message)` row explaining the rejection.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::Envelope;
use crate::app::AppState;
use crate::auth::hash_password;
use crate::database::{models::PenggunaLogin, LoginOutcome, Scalar};
use crate::error::{ApiError, OrFail};

const FAILED: &str = "Gagal Login";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub p_username_login: Option<Scalar>,
    pub p_password_login: Option<Scalar>,
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    /// `Bearer <jwt>`, ready to be sent back as the `Authorization` header.
    pub token: String,
    pub pengguna: Vec<PenggunaLogin>,
}

/// POST /api/login
///
/// A rejection keeps body status 200 but is sent as HTTP 401, with the
/// procedure's status row as `data`.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.or_fail(FAILED)?;

    let filled = |field: Option<Scalar>| field.filter(|v| !v.is_blank());
    let (Some(username), Some(password)) = (filled(body.p_username_login), filled(body.p_password_login)) else {
        return Err(ApiError::fields_required());
    };

    let username = username.to_string();
    let digest = hash_password(&password.to_string());

    let outcome = state.procedures.login(&username, &digest).await.or_fail(FAILED)?;

    let pengguna = match outcome {
        LoginOutcome::Rejected(status) => {
            tracing::info!("Login rejected for {}: {}", username, status.v_message_get);
            let message = status.v_message_get.clone();
            return Ok(Envelope::success(message, vec![status])
                .with_http_status(StatusCode::UNAUTHORIZED)
                .into_response());
        }
        LoginOutcome::Accepted(pengguna) => pengguna,
    };

    let Some(first) = pengguna.first() else {
        return Err(ApiError::failed(FAILED, "sp_login_retiel returned no rows"));
    };

    let username = first.username_pengguna.as_deref().unwrap_or_default();
    let token = state.tokens.issue(username).or_fail(FAILED)?;
    tracing::info!("Login succeeded for {}", username);

    let data = LoginData {
        token: format!("Bearer {}", token),
        pengguna,
    };
    Ok(Envelope::success("Berhasil Login", data).into_response())
}
