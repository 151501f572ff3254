use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

/// Row of `sp_get_all_pengguna`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pengguna {
    pub v_id_pengguna: i64,
    pub v_nama_pengguna: Option<String>,
    pub v_username_pengguna: Option<String>,
    pub v_password_pengguna: Option<String>,
    pub v_role_pengguna: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub v_updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Pengguna {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            v_id_pengguna: decode::int(row, 0)?,
            v_nama_pengguna: decode::opt_text(row, 1)?,
            v_username_pengguna: decode::opt_text(row, 2)?,
            v_password_pengguna: decode::opt_text(row, 3)?,
            v_role_pengguna: decode::opt_text(row, 4)?,
            v_created_at: decode::opt_datetime(row, 5)?,
            v_updated_at: decode::opt_datetime(row, 6)?,
        })
    }
}

/// Row of a successful `sp_login_retiel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenggunaLogin {
    pub id_pengguna: i64,
    pub name_pengguna: Option<String>,
    pub username_pengguna: Option<String>,
    pub role_pengguna: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for PenggunaLogin {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id_pengguna: decode::int(row, 0)?,
            name_pengguna: decode::opt_text(row, 1)?,
            username_pengguna: decode::opt_text(row, 2)?,
            role_pengguna: decode::opt_text(row, 3)?,
            created_at: decode::opt_datetime(row, 4)?,
            updated_at: decode::opt_datetime(row, 5)?,
        })
    }
}
