//! Integration tests for QR code generation.

mod helpers;

use chrono::Duration;

use assethub_core::ErrorKind;
use assethub_entity::audit::AuditAction;
use assethub_entity::qr::CreateQrCode;

use helpers::{TestServices, fixed_time};

#[tokio::test]
async fn test_generate_when_present_is_rejected() {
    let app = TestServices::new().await;
    let asset = app.create_asset("Proyektor").await;
    let baseline = app.audit_entries().await.len();

    let err = app
        .services
        .qr_codes
        .generate(&app.ctx(), asset.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(
        err.message,
        "QR Code sudah ada. Gunakan \"Regenerate\" untuk membuat ulang."
    );

    assert_eq!(app.qr_codes(asset.id).await.len(), 1);
    assert_eq!(app.audit_entries().await.len(), baseline);
}

#[tokio::test]
async fn test_generate_after_removal() {
    let app = TestServices::new().await;
    let asset = app.create_asset("Proyektor").await;

    let existing = app.qr_codes(asset.id).await.remove(0);
    {
        let mut tx = app.store.begin().await.unwrap();
        tx.delete_qr_code(existing.id).await.unwrap();
        tx.commit().await.unwrap();
    }

    let qr = app
        .services
        .qr_codes
        .generate(&app.ctx(), asset.id)
        .await
        .unwrap();
    assert!(app.file_exists(&qr.file_path).await);
    assert_eq!(app.services.qr_codes.current(asset.id).await.unwrap(), Some(qr));

    let history = app.services.audit.history_for_asset(asset.id).await.unwrap();
    assert_eq!(history[0].action, AuditAction::GenerateQr);
    assert_eq!(
        history[0].description,
        "Generate QR Code untuk aset AST-20240517-0001"
    );
}

#[tokio::test]
async fn test_regenerate_leaves_exactly_one() {
    let app = TestServices::new().await;
    let asset = app.create_asset("Proyektor").await;

    // A stray second record, as left behind by an older revision.
    {
        let mut tx = app.store.begin().await.unwrap();
        tx.insert_qr_code(&CreateQrCode {
            asset_id: asset.id,
            file_path: "uploads/qrcodes/QR_AST-20240517-0001_deadbeef.png".to_string(),
            qr_value: "http://aset.sekolah.test/public/aset/1".to_string(),
            generated_at: fixed_time(),
        })
        .await
        .unwrap();
        tx.commit().await.unwrap();
    }
    let before = app.qr_codes(asset.id).await;
    assert_eq!(before.len(), 2);

    let later = fixed_time() + Duration::hours(1);
    let qr = app
        .services
        .qr_codes
        .regenerate(&app.ctx_at(later), asset.id)
        .await
        .unwrap();

    let after = app.qr_codes(asset.id).await;
    assert_eq!(after, vec![qr.clone()]);
    assert_eq!(qr.generated_at, later);
    for old in &before {
        assert!(!app.file_exists(&old.file_path).await);
    }
    assert!(app.file_exists(&qr.file_path).await);

    let history = app.services.audit.history_for_asset(asset.id).await.unwrap();
    assert_eq!(history[0].action, AuditAction::RegenerateQr);
    assert_eq!(
        history[0].description,
        "Regenerate QR Code untuk aset AST-20240517-0001"
    );
}

#[tokio::test]
async fn test_generate_for_missing_asset_is_not_found() {
    let app = TestServices::new().await;

    let err = app
        .services
        .qr_codes
        .regenerate(&app.ctx(), assethub_core::types::AssetId(7))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
