// app.rs - Router assembly and shared state
//
// Public routes (/, /health, /api/login) are mounted as-is. Every resource
// route is wrapped in `require_token` via `route_layer`, so an unknown path
// still answers 404 instead of "Token Required".

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::Procedures;
use crate::handlers::{protected, public};
use crate::middleware::require_token;

/// Everything a handler needs: the procedure store and the token service.
#[derive(Clone)]
pub struct AppState {
    pub procedures: Arc<dyn Procedures>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(procedures: Arc<dyn Procedures>, tokens: TokenService) -> Self {
        Self {
            procedures,
            tokens: Arc::new(tokens),
        }
    }
}

/// The full application with CORS and request tracing from `config`.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = routes(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(config));
    }
    if config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Routes only, without the global layers.
pub fn routes(state: AppState) -> Router {
    let gated = protected_routes().route_layer(from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/login", post(public::login))
        .route("/api/login/", post(public::login))
        .route("/api/login/post", post(public::login))
        .merge(gated)
        .with_state(state)
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .merge(pengguna_routes())
        .merge(produk_routes())
        .merge(kategori_routes())
        .merge(pemasok_routes())
        .merge(laporan_stok_routes())
        .merge(log_aktifitas_routes())
        .merge(transaksi_routes())
        .route("/api/dashboard/getdatadashboard", post(protected::dashboard::get_data_dashboard))
}

fn pengguna_routes() -> Router<AppState> {
    use protected::pengguna;

    Router::new()
        .route("/api/pengguna/getdatapengguna", get(pengguna::get_data_pengguna))
        .route("/api/pengguna/adddatapengguna", post(pengguna::add_data_pengguna))
        .route("/api/pengguna/updatedatapengguna", post(pengguna::update_data_pengguna))
        .route("/api/pengguna/deletedatapengguna", post(pengguna::delete_data_pengguna))
}

fn produk_routes() -> Router<AppState> {
    use protected::produk;

    Router::new()
        .route("/api/produk/getdataproduk", get(produk::get_data_produk))
        .route("/api/produk/adddataproduk", post(produk::add_data_produk))
        .route("/api/produk/updatedataproduk", post(produk::update_data_produk))
        .route("/api/produk/deletedataproduk", post(produk::delete_data_produk))
}

fn kategori_routes() -> Router<AppState> {
    use protected::{kategori, subkategori};

    Router::new()
        .route("/api/kategori/getdatakategori", get(kategori::get_data_kategori))
        .route("/api/kategori/adddatakategori", post(kategori::add_data_kategori))
        .route("/api/kategori/updatedatakategori", post(kategori::update_data_kategori))
        .route("/api/kategori/deletedatakategori", post(kategori::delete_data_kategori))
        .route("/api/subkategori/getdatasubkategori", get(subkategori::get_data_subkategori))
        .route("/api/subkategori/adddatasubkategori", post(subkategori::add_data_subkategori))
        .route("/api/subkategori/updatedatasubkategori", post(subkategori::update_data_subkategori))
        .route("/api/subkategori/deletedatasubkategori", post(subkategori::delete_data_subkategori))
        // Older clients address subcategories through the category prefix
        .route("/api/kategori/adddatasubkategori", post(subkategori::add_data_subkategori))
        .route("/api/kategori/updatedatasubkategori", post(subkategori::update_data_subkategori))
        .route("/api/kategori/deletedatasubkategori", post(subkategori::delete_data_subkategori))
}

fn pemasok_routes() -> Router<AppState> {
    use protected::pemasok;

    Router::new()
        .route("/api/pemasok/getdatapemasok", get(pemasok::get_data_pemasok))
        .route("/api/pemasok/adddatapemasok", post(pemasok::add_data_pemasok))
        .route("/api/pemasok/updatedatapemasok", post(pemasok::update_data_pemasok))
        .route("/api/pemasok/deletedatapemasok", post(pemasok::delete_data_pemasok))
}

fn laporan_stok_routes() -> Router<AppState> {
    use protected::laporan_stok;

    Router::new()
        .route("/api/laporanstok/getdatalaporanstok", get(laporan_stok::get_data_laporan_stok))
        .route("/api/laporanstok/getlaporanstok", get(laporan_stok::get_data_laporan_stok))
        .route("/api/laporanstok/adddatalaporanstok", post(laporan_stok::add_data_laporan_stok))
        .route("/api/laporanstok/deletedatalaporanstok", post(laporan_stok::delete_data_laporan_stok))
}

fn log_aktifitas_routes() -> Router<AppState> {
    use protected::log_aktifitas;

    Router::new()
        .route("/api/logaktifitas/getdatalogaktifitas", get(log_aktifitas::get_data_log_aktifitas))
        .route("/api/logaktifitas/getlogaktifitas", get(log_aktifitas::get_data_log_aktifitas))
        .route("/api/logaktifitas/adddatalogaktifitas", post(log_aktifitas::add_data_log_aktifitas))
        .route("/api/logaktifitas/addlogaktifitas", post(log_aktifitas::add_data_log_aktifitas))
        .route("/api/logaktifitas/deletedatalogaktifitas", post(log_aktifitas::delete_data_log_aktifitas))
        .route("/api/logaktifitas/deletelogaktifitas", post(log_aktifitas::delete_data_log_aktifitas))
}

fn transaksi_routes() -> Router<AppState> {
    use protected::transaksi;

    Router::new()
        .route("/api/transaksi/getalldatatransaksi", get(transaksi::get_all_data_transaksi))
        .route("/api/transaksi/getdatatransaksibykasir", post(transaksi::get_data_transaksi_by_kasir))
        .route("/api/transaksi/adddatatransaksi", post(transaksi::add_data_transaksi))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.environment.is_development() || config.security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
