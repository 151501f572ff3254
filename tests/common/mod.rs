#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDateTime;
use serde_json::Value;
use tower::ServiceExt;

use pos_retail_api::app::{routes, AppState};
use pos_retail_api::auth::TokenService;
use pos_retail_api::database::{
    models::{
        Dashboard, DashboardRows, DetailTransaksi, Kategori, LaporanStok, LogAktifitas, Pemasok, Pengguna, PenggunaLogin, Produk,
        Subkategori, Transaksi,
    },
    prepend_id, Call, DatabaseError, KasirHistory, LoginOutcome, Procedures, Scalar,
};

pub const SECRET: &str = "test-secret";

/// In-memory procedure store. Reads return the canned rows; mutations are
/// recorded so tests can assert exactly what would have been sent.
#[derive(Default)]
pub struct MemoryProcedures {
    pub pengguna: Vec<Pengguna>,
    pub produk: Vec<Produk>,
    pub kategori: Vec<Kategori>,
    pub subkategori: Vec<Subkategori>,
    pub pemasok: Vec<Pemasok>,
    pub laporan_stok: Vec<LaporanStok>,
    pub log_aktifitas: Vec<LogAktifitas>,
    pub transaksi: Vec<Transaksi>,
    pub detail_transaksi: Vec<DetailTransaksi>,
    pub kasir: Option<KasirHistory>,
    pub login: Option<LoginOutcome>,
    /// First rows of the dashboard procedures; unset ones read as empty.
    pub dashboard: DashboardRows,
    /// Every call fails with this message when set.
    pub failure: Option<String>,
    pub next_transaksi_id: i64,
    pub calls: Mutex<Vec<Call>>,
    pub logins: Mutex<Vec<(String, String)>>,
}

impl MemoryProcedures {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DatabaseError> {
        match &self.failure {
            Some(message) => Err(DatabaseError::Sqlx(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Procedures for MemoryProcedures {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check()
    }

    async fn login(&self, username: &str, password_digest: &str) -> Result<LoginOutcome, DatabaseError> {
        self.check()?;
        self.logins
            .lock()
            .unwrap()
            .push((username.to_string(), password_digest.to_string()));
        Ok(self.login.clone().unwrap_or(LoginOutcome::Accepted(Vec::new())))
    }

    async fn pengguna(&self) -> Result<Vec<Pengguna>, DatabaseError> {
        self.check()?;
        Ok(self.pengguna.clone())
    }

    async fn produk(&self) -> Result<Vec<Produk>, DatabaseError> {
        self.check()?;
        Ok(self.produk.clone())
    }

    async fn kategori(&self) -> Result<Vec<Kategori>, DatabaseError> {
        self.check()?;
        Ok(self.kategori.clone())
    }

    async fn subkategori(&self) -> Result<Vec<Subkategori>, DatabaseError> {
        self.check()?;
        Ok(self.subkategori.clone())
    }

    async fn pemasok(&self) -> Result<Vec<Pemasok>, DatabaseError> {
        self.check()?;
        Ok(self.pemasok.clone())
    }

    async fn laporan_stok(&self) -> Result<Vec<LaporanStok>, DatabaseError> {
        self.check()?;
        Ok(self.laporan_stok.clone())
    }

    async fn log_aktifitas(&self) -> Result<Vec<LogAktifitas>, DatabaseError> {
        self.check()?;
        Ok(self.log_aktifitas.clone())
    }

    async fn transaksi(&self) -> Result<Vec<Transaksi>, DatabaseError> {
        self.check()?;
        Ok(self.transaksi.clone())
    }

    async fn detail_transaksi(&self) -> Result<Vec<DetailTransaksi>, DatabaseError> {
        self.check()?;
        Ok(self.detail_transaksi.clone())
    }

    async fn transaksi_by_kasir(&self, id_pengguna: &Scalar) -> Result<KasirHistory, DatabaseError> {
        self.check()?;
        self.record(Call::new("sp_get_pengguna_histrori_transaksi").arg(Some(id_pengguna.clone())));
        Ok(self.kasir.clone().unwrap_or(KasirHistory::Empty))
    }

    async fn dashboard(&self, bulan: Option<&Scalar>, tahun: Option<&Scalar>) -> Result<Dashboard, DatabaseError> {
        self.check()?;
        self.record(
            Call::new("sp_get_total_produk_terjual_periode")
                .arg(bulan.cloned())
                .arg(tahun.cloned()),
        );
        Ok(Dashboard::from(self.dashboard.clone()))
    }

    async fn execute(&self, call: Call) -> Result<(), DatabaseError> {
        self.check()?;
        self.record(call);
        Ok(())
    }

    async fn add_transaksi(&self, header: Call, lines: Vec<Call>) -> Result<i64, DatabaseError> {
        self.check()?;
        let id = self.next_transaksi_id;
        self.record(header);
        for line in prepend_id(lines, id) {
            self.record(line);
        }
        Ok(id)
    }
}

pub struct TestApp {
    pub procedures: Arc<MemoryProcedures>,
    pub tokens: Arc<TokenService>,
    router: Router,
}

impl TestApp {
    pub fn new(procedures: MemoryProcedures) -> Self {
        let procedures = Arc::new(procedures);
        let tokens = TokenService::new(SECRET).expect("test secret");
        let state = AppState::new(procedures.clone(), tokens);
        Self {
            procedures,
            tokens: state.tokens.clone(),
            router: routes(state),
        }
    }

    pub fn empty() -> Self {
        Self::new(MemoryProcedures::default())
    }

    /// `Bearer <jwt>` for a fresh token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.tokens.issue("admin").expect("issue token"))
    }

    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::AUTHORIZATION, self.bearer())
            .body(Body::empty())?;
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        let request = self.post_request(path, body)?;
        self.send(request).await
    }

    /// Authorized JSON POST, for tests that need the raw response bytes.
    pub fn post_request(&self, path: &str, body: Value) -> Result<Request<Body>> {
        Ok(Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::AUTHORIZATION, self.bearer())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?)
    }

    /// Send as-is, without adding an `Authorization` header.
    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let (status, bytes) = self.send_raw(request).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    pub async fn send_raw(&self, request: Request<Body>) -> Result<(StatusCode, Vec<u8>)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }
}

pub fn timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

pub fn kategori(id: i64, name: &str) -> Kategori {
    Kategori {
        id_kategori: id,
        name_kategori: Some(name.to_string()),
        v_created_at: timestamp("2024-05-01 08:00:00"),
        v_updated_at: None,
    }
}

pub fn subkategori(id: i64, id_kategori: i64, name: &str) -> Subkategori {
    Subkategori {
        id_subkategori: id,
        id_kategori,
        name_subkategori: Some(name.to_string()),
        v_created_at: timestamp("2024-05-01 08:30:00"),
        v_updated_at: None,
    }
}

pub fn transaksi(id: i64, kasir: &str) -> Transaksi {
    Transaksi {
        v_id_transaksi: id,
        v_id_pengguna: 2,
        v_nama_pengguna: Some(kasir.to_string()),
        v_nama_pelanggan: Some("Umum".to_string()),
        v_quantity_transaksi: 3,
        v_total_payment: 50000,
        v_total_price: 42000,
        v_total_change: 8000,
        v_date_transaksi: timestamp("2024-06-01 10:15:00"),
    }
}

pub fn detail(id: i64, id_transaksi: i64, produk: &str) -> DetailTransaksi {
    DetailTransaksi {
        v_id_detail_transaksi: id,
        v_id_transaksi: id_transaksi,
        v_name_kategori: Some("Minuman".to_string()),
        v_name_subkategori: None,
        v_name_produk: Some(produk.to_string()),
        v_price_produk: 14000,
        v_quantity_produk: 1,
    }
}

pub fn pengguna_login(username: &str) -> PenggunaLogin {
    PenggunaLogin {
        id_pengguna: 1,
        name_pengguna: Some("Administrator".to_string()),
        username_pengguna: Some(username.to_string()),
        role_pengguna: Some("admin".to_string()),
        created_at: timestamp("2024-01-01 00:00:00"),
        updated_at: None,
    }
}
