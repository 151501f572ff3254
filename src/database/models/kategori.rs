use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{mysql::MySqlRow, FromRow};

use crate::api::format;
use crate::database::decode;

/// Row of `sp_get_all_kategori`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kategori {
    pub id_kategori: i64,
    pub name_kategori: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub v_updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Kategori {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id_kategori: decode::int(row, 0)?,
            name_kategori: decode::opt_text(row, 1)?,
            v_created_at: decode::opt_datetime(row, 2)?,
            v_updated_at: decode::opt_datetime(row, 3)?,
        })
    }
}

/// Row of `sp_get_all_subkategori`; `id_kategori` is the parent key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subkategori {
    pub id_subkategori: i64,
    pub id_kategori: i64,
    pub name_subkategori: Option<String>,
    #[serde(serialize_with = "format::datetime")]
    pub v_created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "format::datetime")]
    pub v_updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, MySqlRow> for Subkategori {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id_subkategori: decode::int(row, 0)?,
            id_kategori: decode::int(row, 1)?,
            name_subkategori: decode::opt_text(row, 2)?,
            v_created_at: decode::opt_datetime(row, 3)?,
            v_updated_at: decode::opt_datetime(row, 4)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KategoriWithSub {
    #[serde(flatten)]
    pub kategori: Kategori,
    pub v_subkategori: Vec<Subkategori>,
}
