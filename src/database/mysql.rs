use async_trait::async_trait;
use sqlx::{
    mysql::{MySqlArguments, MySqlRow},
    query::Query,
    FromRow, MySql, MySqlPool, Row,
};
use tracing::debug;

use super::decode;
use super::manager::DatabaseError;
use super::models::{
    Dashboard, DashboardRows, DetailTransaksi, Kategori, LaporanStok, LogAktifitas, Pemasok, Pengguna, PenggunaLogin, Produk,
    StatusMessage, Subkategori, Transaksi,
};
use super::procedures::{prepend_id, Call, KasirHistory, LoginOutcome, Procedures, ResultShape};
use super::scalar::Scalar;

/// [`Procedures`] backed by a MySQL pool.
#[derive(Clone)]
pub struct MySqlProcedures {
    pool: MySqlPool,
}

impl MySqlProcedures {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn rows(&self, call: &Call) -> Result<Vec<MySqlRow>, DatabaseError> {
        let sql = call.sql();
        let rows = bind_all(sqlx::query(&sql), &call.args).fetch_all(&self.pool).await?;
        debug!("{} returned {} rows", call.procedure, rows.len());
        Ok(rows)
    }

    async fn fetch<T>(&self, call: Call) -> Result<Vec<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, MySqlRow>,
    {
        let rows = self.rows(&call).await?;
        Ok(rows.iter().map(T::from_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn first_row(&self, call: Call) -> Result<Option<MySqlRow>, DatabaseError> {
        Ok(self.rows(&call).await?.into_iter().next())
    }
}

fn bind<'q>(query: Query<'q, MySql, MySqlArguments>, value: &'q Option<Scalar>) -> Query<'q, MySql, MySqlArguments> {
    match value {
        None => query.bind(None::<String>),
        Some(Scalar::Int(v)) => query.bind(*v),
        Some(Scalar::Float(v)) => query.bind(*v),
        Some(Scalar::Bool(v)) => query.bind(*v),
        Some(Scalar::Text(v)) => query.bind(v.as_str()),
    }
}

fn bind_all<'q>(query: Query<'q, MySql, MySqlArguments>, args: &'q [Option<Scalar>]) -> Query<'q, MySql, MySqlArguments> {
    args.iter().fold(query, bind)
}

fn first_width(rows: &[MySqlRow]) -> Option<usize> {
    rows.first().map(|row| row.columns().len())
}

fn period_call(procedure: &'static str, bulan: Option<&Scalar>, tahun: Option<&Scalar>) -> Call {
    Call::new(procedure).arg(bulan.cloned()).arg(tahun.cloned())
}

#[async_trait]
impl Procedures for MySqlProcedures {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn login(&self, username: &str, password_digest: &str) -> Result<LoginOutcome, DatabaseError> {
        let call = Call::new("sp_login_retiel")
            .arg(Some(Scalar::from(username)))
            .arg(Some(Scalar::from(password_digest)));
        let rows = self.rows(&call).await?;

        if let (ResultShape::Status, Some(first)) = (ResultShape::of_login(rows.len(), first_width(&rows)), rows.first()) {
            return Ok(LoginOutcome::Rejected(StatusMessage::from_row(first)?));
        }

        let users = rows.iter().map(PenggunaLogin::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(LoginOutcome::Accepted(users))
    }

    async fn pengguna(&self) -> Result<Vec<Pengguna>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_pengguna")).await
    }

    async fn produk(&self) -> Result<Vec<Produk>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_product")).await
    }

    async fn kategori(&self) -> Result<Vec<Kategori>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_kategori")).await
    }

    async fn subkategori(&self) -> Result<Vec<Subkategori>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_subkategori")).await
    }

    async fn pemasok(&self) -> Result<Vec<Pemasok>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_pemasok")).await
    }

    async fn laporan_stok(&self) -> Result<Vec<LaporanStok>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_laporan_stok")).await
    }

    async fn log_aktifitas(&self) -> Result<Vec<LogAktifitas>, DatabaseError> {
        self.fetch(Call::new("sp_get_log_aktifitas")).await
    }

    async fn transaksi(&self) -> Result<Vec<Transaksi>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_histori_transaksi")).await
    }

    async fn detail_transaksi(&self) -> Result<Vec<DetailTransaksi>, DatabaseError> {
        self.fetch(Call::new("sp_get_all_detail_transaksi")).await
    }

    async fn transaksi_by_kasir(&self, id_pengguna: &Scalar) -> Result<KasirHistory, DatabaseError> {
        let call = Call::new("sp_get_pengguna_histrori_transaksi").arg(Some(id_pengguna.clone()));
        let rows = self.rows(&call).await?;

        match (ResultShape::of(rows.len(), first_width(&rows)), rows.first()) {
            (ResultShape::Status, Some(first)) => Ok(KasirHistory::Status(StatusMessage::from_row(first)?)),
            (ResultShape::Rows, _) => Ok(KasirHistory::Rows(
                rows.iter().map(Transaksi::from_row).collect::<Result<Vec<_>, _>>()?,
            )),
            _ => Ok(KasirHistory::Empty),
        }
    }

    async fn dashboard(&self, bulan: Option<&Scalar>, tahun: Option<&Scalar>) -> Result<Dashboard, DatabaseError> {
        let int_at = |row: MySqlRow| decode::opt_int(&row, 0);
        let text_at = |row: MySqlRow| decode::opt_text(&row, 0);

        let rows = DashboardRows {
            total_produk_terjual: self
                .first_row(period_call("sp_get_total_produk_terjual_periode", bulan, tahun))
                .await?
                .map(int_at)
                .transpose()?,
            total_transaksi_periode: self
                .first_row(period_call("sp_get_total_transaksi_periode", bulan, tahun))
                .await?
                .map(int_at)
                .transpose()?,
            total_keuntungan_periode: self
                .first_row(period_call("sp_get_profit_perbulan", bulan, tahun))
                .await?
                .map(int_at)
                .transpose()?,
            produk_best_seller: self
                .first_row(period_call("sp_get_produk_terbaik_periode", bulan, tahun))
                .await?
                .map(text_at)
                .transpose()?,
            produk_stok_rendah: self
                .first_row(Call::new("sp_get_produk_stok_rendah"))
                .await?
                .map(text_at)
                .transpose()?,
        };

        Ok(Dashboard::from(rows))
    }

    async fn execute(&self, call: Call) -> Result<(), DatabaseError> {
        let sql = call.sql();
        let mut tx = self.pool.begin().await?;
        bind_all(sqlx::query(&sql), &call.args).execute(&mut *tx).await?;
        tx.commit().await?;
        debug!("{} committed", call.procedure);
        Ok(())
    }

    async fn add_transaksi(&self, header: Call, lines: Vec<Call>) -> Result<i64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let sql = header.sql();
        let row = bind_all(sqlx::query(&sql), &header.args)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(DatabaseError::EmptyResult { procedure: header.procedure })?;
        let id_transaksi = decode::int(&row, 0)?;

        for line in prepend_id(lines, id_transaksi) {
            let sql = line.sql();
            bind_all(sqlx::query(&sql), &line.args).execute(&mut *tx).await?;
        }

        // Dropping `tx` before this point rolls every call back
        tx.commit().await?;
        debug!("{} committed as transaction {}", header.procedure, id_transaksi);
        Ok(id_transaksi)
    }
}
