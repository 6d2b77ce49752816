//! Integration tests for the public HTTP surface.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "memory");
}

#[tokio::test]
async fn test_public_asset_detail() {
    let app = TestApp::new().await;
    let asset = app.create_asset("Proyektor").await;

    let response = app.get(&format!("/public/aset/{}", asset.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["asset"]["asset_code"], "AST-20240517-0001");
    assert_eq!(body["data"]["asset"]["name"], "Proyektor");
    assert_eq!(body["data"]["category"]["name"], "Kategori Proyektor");
    assert_eq!(body["data"]["location"]["name"], "Lokasi Proyektor");
    assert!(body["data"]["qr_code"]["file_path"].is_string());
}

#[tokio::test]
async fn test_public_asset_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/public/aset/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Aset tidak ditemukan");
}

#[tokio::test]
async fn test_public_asset_invalid_id() {
    let app = TestApp::new().await;

    let response = app.get("/public/aset/bukan-angka").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_static_serves_qr_image() {
    let app = TestApp::new().await;
    let asset = app.create_asset("Laptop").await;
    let qr = app
        .services
        .qr_codes
        .current(asset.id)
        .await
        .unwrap()
        .expect("QR code issued on create");

    let response = app.get(&format!("/static/{}", qr.file_path)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["content-type"], "image/png");
    assert!(response.bytes.starts_with(b"\x89PNG"));
}

#[tokio::test]
async fn test_static_missing_file() {
    let app = TestApp::new().await;

    let response = app.get("/static/uploads/photos/none.png").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
