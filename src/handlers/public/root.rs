// handlers/public/root.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Point-of-sale REST API",
        "endpoints": {
            "public": ["/", "/health", "/api/login"],
            "protected": [
                "/api/pengguna/*",
                "/api/produk/*",
                "/api/kategori/*",
                "/api/subkategori/*",
                "/api/pemasok/*",
                "/api/laporanstok/*",
                "/api/logaktifitas/*",
                "/api/transaksi/*",
                "/api/dashboard/*"
            ]
        }
    }))
}

/// GET /health - pings the database
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.procedures.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "unreachable", "error": e.to_string() })),
            )
        }
    }
}
