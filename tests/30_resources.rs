mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{kategori, subkategori, MemoryProcedures, TestApp};
use pos_retail_api::database::{Call, Scalar};
use serde_json::json;

fn text(value: &str) -> Option<Scalar> {
    Some(Scalar::from(value))
}

#[tokio::test]
async fn categories_nest_their_subcategories() -> Result<()> {
    let app = TestApp::new(MemoryProcedures {
        kategori: vec![kategori(1, "Minuman"), kategori(2, "Makanan"), kategori(3, "Rokok")],
        subkategori: vec![
            subkategori(10, 1, "Kopi"),
            subkategori(11, 1, "Teh"),
            subkategori(12, 2, "Roti"),
        ],
        ..Default::default()
    });

    let (status, body) = app.get("/api/kategori/getdatakategori").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Get Data Kategori");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["name_kategori"], "Minuman");
    assert_eq!(data[0]["v_created_at"], "2024-05-01 08:00:00");
    assert_eq!(data[0]["v_updated_at"], serde_json::Value::Null);

    let ids = |i: usize| -> Vec<i64> {
        data[i]["v_subkategori"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id_subkategori"].as_i64().unwrap())
            .collect()
    };
    assert_eq!(ids(0), vec![10, 11]);
    assert_eq!(ids(1), vec![12]);
    assert_eq!(data[2]["v_subkategori"], json!([]));
    Ok(())
}

#[tokio::test]
async fn null_category_name_renders_as_null() -> Result<()> {
    let mut unnamed = kategori(4, "");
    unnamed.name_kategori = None;
    let app = TestApp::new(MemoryProcedures { kategori: vec![unnamed], ..Default::default() });

    let (status, body) = app.get("/api/kategori/getdatakategori").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name_kategori"], serde_json::Value::Null);
    assert_eq!(body["data"][0]["v_subkategori"], json!([]));
    Ok(())
}

#[tokio::test]
async fn empty_category_name_is_rejected_before_the_database() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post("/api/kategori/adddatakategori", json!({"p_nama_kategori": ""}))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["notification_response"], "Semua field harus diisi!");
    assert_eq!(body["data"], json!([]));
    assert!(app.procedures.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn adding_a_category_runs_one_procedure() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post("/api/kategori/adddatakategori", json!({"p_nama_kategori": "Minuman"}))
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Menambahkan Data Kategori");
    assert_eq!(body["data"], json!([]));
    assert_eq!(
        app.procedures.calls(),
        vec![Call::new("sp_kategori_add").arg(text("Minuman"))]
    );
    Ok(())
}

#[tokio::test]
async fn deletes_require_their_id() -> Result<()> {
    let app = TestApp::empty();
    let cases = [
        ("/api/pengguna/deletedatapengguna", "ID Pengguna Required"),
        ("/api/produk/deletedataproduk", "ID Produk Required"),
        ("/api/kategori/deletedatakategori", "ID Kategori Required"),
        ("/api/subkategori/deletedatasubkategori", "ID Sub-Kategori Required"),
        ("/api/kategori/deletedatasubkategori", "ID Sub-Kategori Required"),
        ("/api/pemasok/deletedatapemasok", "ID Pemasok Required"),
        ("/api/laporanstok/deletedatalaporanstok", "ID Stok Required"),
        ("/api/logaktifitas/deletelogaktifitas", "ID Log Required"),
    ];

    for (path, message) in cases {
        let (status, body) = app.post(path, json!({})).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(body["notification_response"], message, "{}", path);
    }
    assert!(app.procedures.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn updates_pass_every_field_in_order() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post(
            "/api/produk/updatedataproduk",
            json!({
                "p_id_produk": 7,
                "p_id_kategori": 1,
                "p_id_subkategori": "10",
                "p_nama_produk": "Kopi Susu",
                "p_harga_produk": 15000,
                "p_stok_produk": 20
            }),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Update Data Produk");
    assert_eq!(
        app.procedures.calls(),
        vec![Call::new("sp_produk_edit")
            .arg(Some(Scalar::Int(7)))
            .arg(Some(Scalar::Int(1)))
            .arg(text("10"))
            .arg(text("Kopi Susu"))
            .arg(Some(Scalar::Int(15000)))
            .arg(Some(Scalar::Int(20)))]
    );
    Ok(())
}

#[tokio::test]
async fn update_without_id_is_rejected() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post("/api/pemasok/updatedatapemasok", json!({"p_nama_pemasok": "CV Sumber"}))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notification_response"], "ID Pemasok Required");
    Ok(())
}

#[tokio::test]
async fn new_users_store_the_password_digest() -> Result<()> {
    let app = TestApp::empty();

    let (status, _) = app
        .post(
            "/api/pengguna/adddatapengguna",
            json!({
                "p_nama_pengguna": "Budi",
                "p_username_pengguna": "budi",
                "p_password_pengguna": "password",
                "p_role_pengguna": "kasir"
            }),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        app.procedures.calls(),
        vec![Call::new("sp_pengguna_add")
            .arg(text("Budi"))
            .arg(text("budi"))
            .arg(text("55be20677b1caac1b4d53058800b06ef"))
            .arg(text("kasir"))]
    );
    Ok(())
}

#[tokio::test]
async fn user_update_without_password_keeps_it_null() -> Result<()> {
    let app = TestApp::empty();

    app.post(
        "/api/pengguna/updatedatapengguna",
        json!({"p_id_pengguna": 3, "p_nama_pengguna": "Budi", "p_username_pengguna": "budi", "p_role_pengguna": "admin"}),
    )
    .await?;

    let calls = app.procedures.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].procedure, "sp_pengguna_edit");
    assert_eq!(calls[0].args[3], None);
    Ok(())
}

#[tokio::test]
async fn subcategory_routes_answer_under_both_prefixes() -> Result<()> {
    let app = TestApp::empty();
    let body = json!({"p_id_kategori": 1, "p_nama_subkategori": "Kopi"});

    let (status, first) = app.post("/api/subkategori/adddatasubkategori", body.clone()).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, second) = app.post("/api/kategori/adddatasubkategori", body).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first["notification_response"], "Berhasil Menambahkan Data Sub-Kategori");
    assert_eq!(second["notification_response"], first["notification_response"]);
    assert_eq!(app.procedures.calls().len(), 2);
    Ok(())
}

#[tokio::test]
async fn activity_log_aliases_share_handlers() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post(
            "/api/logaktifitas/addlogaktifitas",
            json!({"p_id_pengguna": 1, "p_aksi_aktifitas": "Login"}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Add Data Log-Aktifitas");

    let (status, body) = app.get("/api/logaktifitas/getlogaktifitas").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Get Log Aktifitas");
    Ok(())
}

#[tokio::test]
async fn stock_report_records_movement() -> Result<()> {
    let app = TestApp::empty();

    let (status, body) = app
        .post(
            "/api/laporanstok/adddatalaporanstok",
            json!({"p_id_produk": 7, "p_perubahan_stok": -2, "p_aksi_stok": "keluar"}),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification_response"], "Berhasil Menambahkan Laporan Stok");
    assert_eq!(
        app.procedures.calls(),
        vec![Call::new("sp_laporan_stok_add")
            .arg(Some(Scalar::Int(7)))
            .arg(Some(Scalar::Int(-2)))
            .arg(text("keluar"))]
    );

    let (_, body) = app.get("/api/laporanstok/getlaporanstok").await?;
    assert_eq!(body["notification_response"], "Berhasil Get Laporan Stok");
    Ok(())
}

#[tokio::test]
async fn database_failure_uses_resource_message() -> Result<()> {
    let app = TestApp::new(MemoryProcedures {
        failure: Some("Table 'db_retiel.pemasok' doesn't exist".to_string()),
        ..Default::default()
    });

    let (status, body) = app.get("/api/pemasok/getdatapemasok").await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["notification_response"], "Gagal Get Data Pemasok");
    assert!(body["error"].as_str().unwrap().contains("doesn't exist"));
    Ok(())
}

#[tokio::test]
async fn envelopes_are_pretty_printed_and_text_passes_through() -> Result<()> {
    let app = TestApp::empty();
    let request = app.post_request("/api/kategori/adddatakategori", json!({"p_nama_kategori": "Café"}))?;

    let (_, bytes) = app.send_raw(request).await?;
    let rendered = String::from_utf8(bytes)?;

    assert!(rendered.starts_with("{\n    \"status\": 200,\n    \"tanggal\": "));
    assert!(rendered.contains("\n    \"notification_response\": \"Berhasil Menambahkan Data Kategori\",\n"));
    assert_eq!(
        app.procedures.calls(),
        vec![Call::new("sp_kategori_add").arg(text("Café"))]
    );
    Ok(())
}
