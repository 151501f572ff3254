use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{
    Dashboard, DetailTransaksi, Kategori, LaporanStok, LogAktifitas, Pemasok, Pengguna, PenggunaLogin, Produk,
    StatusMessage, Subkategori, Transaksi,
};
use super::scalar::Scalar;

/// One stored-procedure invocation with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub procedure: &'static str,
    pub args: Vec<Option<Scalar>>,
}

impl Call {
    pub fn new(procedure: &'static str) -> Self {
        Self { procedure, args: Vec::new() }
    }

    pub fn arg(mut self, value: Option<Scalar>) -> Self {
        self.args.push(value);
        self
    }

    /// `CALL sp_name(?, ?, ...)`
    pub fn sql(&self) -> String {
        let placeholders = vec!["?"; self.args.len()].join(", ");
        format!("CALL {}({})", self.procedure, placeholders)
    }
}

/// Column count of a `(status, message)` row.
pub const STATUS_ROW_WIDTH: usize = 2;

/// How a procedure answered, judged from its row count and the width of its
/// first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    Empty,
    Status,
    Rows,
}

impl ResultShape {
    /// The first row decides: a status-width row means the whole result is
    /// a `(status, message)` answer.
    pub fn of(row_count: usize, first_width: Option<usize>) -> Self {
        match (row_count, first_width) {
            (0, _) | (_, None) => Self::Empty,
            (_, Some(STATUS_ROW_WIDTH)) => Self::Status,
            _ => Self::Rows,
        }
    }

    /// Login only rejects with exactly one status-width row; anything else
    /// is a (possibly empty) list of users.
    pub fn of_login(row_count: usize, first_width: Option<usize>) -> Self {
        match (row_count, first_width) {
            (1, Some(STATUS_ROW_WIDTH)) => Self::Status,
            (0, _) => Self::Empty,
            _ => Self::Rows,
        }
    }
}

/// Put the new transaction id in front of every detail line's arguments.
pub fn prepend_id(lines: Vec<Call>, id: i64) -> Vec<Call> {
    lines
        .into_iter()
        .map(|mut line| {
            line.args.insert(0, Some(Scalar::Int(id)));
            line
        })
        .collect()
}

/// Result of `sp_login_retiel`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The procedure answered with a single `(status, message)` row.
    Rejected(StatusMessage),
    Accepted(Vec<PenggunaLogin>),
}

/// Result of `sp_get_pengguna_histrori_transaksi`.
#[derive(Debug, Clone, PartialEq)]
pub enum KasirHistory {
    Empty,
    Status(StatusMessage),
    Rows(Vec<Transaksi>),
}

/// The stored procedures the endpoints call, with rows already mapped to
/// named records.
///
/// Reads run against the pool. `execute` and `add_transaksi` run inside a
/// database transaction and commit before returning; on error nothing is
/// committed.
#[async_trait]
pub trait Procedures: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn login(&self, username: &str, password_digest: &str) -> Result<LoginOutcome, DatabaseError>;

    async fn pengguna(&self) -> Result<Vec<Pengguna>, DatabaseError>;

    async fn produk(&self) -> Result<Vec<Produk>, DatabaseError>;

    async fn kategori(&self) -> Result<Vec<Kategori>, DatabaseError>;

    async fn subkategori(&self) -> Result<Vec<Subkategori>, DatabaseError>;

    async fn pemasok(&self) -> Result<Vec<Pemasok>, DatabaseError>;

    async fn laporan_stok(&self) -> Result<Vec<LaporanStok>, DatabaseError>;

    async fn log_aktifitas(&self) -> Result<Vec<LogAktifitas>, DatabaseError>;

    async fn transaksi(&self) -> Result<Vec<Transaksi>, DatabaseError>;

    async fn detail_transaksi(&self) -> Result<Vec<DetailTransaksi>, DatabaseError>;

    async fn transaksi_by_kasir(&self, id_pengguna: &Scalar) -> Result<KasirHistory, DatabaseError>;

    async fn dashboard(&self, bulan: Option<&Scalar>, tahun: Option<&Scalar>) -> Result<Dashboard, DatabaseError>;

    /// Run a mutating procedure and commit.
    async fn execute(&self, call: Call) -> Result<(), DatabaseError>;

    /// Run `header`, read the new transaction id from its first column, then
    /// run each line with that id prepended to its arguments. One commit.
    async fn add_transaksi(&self, header: Call, lines: Vec<Call>) -> Result<i64, DatabaseError>;
}
