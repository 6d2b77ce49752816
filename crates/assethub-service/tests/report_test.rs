//! Integration tests for the dashboard, audit views, and user registry.

mod helpers;

use chrono::{Duration, NaiveDate};

use assethub_core::ErrorKind;
use assethub_entity::audit::{AuditAction, AuditFilter};
use assethub_entity::user::UserRole;

use helpers::{TestServices, fixed_time};

#[tokio::test]
async fn test_dashboard_counts() {
    let app = TestServices::new().await;
    for name in ["Meja", "Kursi", "Lemari"] {
        app.create_asset(name).await;
    }

    let stats = app.services.dashboard.stats(fixed_time()).await.unwrap();
    assert_eq!(stats.total_assets, 3);
    assert_eq!(stats.total_categories, 1);
    assert_eq!(stats.total_locations, 1);
    assert_eq!(stats.total_qr_codes, 3);
    // Seeding happened thirty days earlier.
    assert_eq!(stats.today_activity, 3);
    assert_eq!(stats.recent_activity.len(), 5);
    assert_eq!(stats.recent_activity[0].action, AuditAction::Add);
}

#[tokio::test]
async fn test_dashboard_recent_activity_is_capped() {
    let app = TestServices::new().await;
    for i in 0..12 {
        app.create_asset(&format!("Kursi {i}")).await;
    }

    let stats = app
        .services
        .dashboard
        .stats(fixed_time() + Duration::days(1))
        .await
        .unwrap();
    assert_eq!(stats.recent_activity.len(), 10);
    assert_eq!(stats.today_activity, 0);
}

#[tokio::test]
async fn test_audit_search_by_action_and_day() {
    let app = TestServices::new().await;
    let asset = app.create_asset("Proyektor").await;
    app.services
        .qr_codes
        .regenerate(&app.ctx(), asset.id)
        .await
        .unwrap();

    let regenerated = app
        .services
        .audit
        .search(&AuditFilter {
            action: Some(AuditAction::RegenerateQr),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(regenerated.len(), 1);

    let today = app
        .services
        .audit
        .search(&AuditFilter {
            day: NaiveDate::from_ymd_opt(2024, 5, 17),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(today.len(), 2);

    let actions = app.services.audit.actions().await.unwrap();
    assert_eq!(
        actions,
        vec![
            AuditAction::Add,
            AuditAction::AddCategory,
            AuditAction::AddLocation,
            AuditAction::RegenerateQr,
        ]
    );
}

#[tokio::test]
async fn test_default_admin_is_created_once() {
    let app = TestServices::new().await;

    let again = app.services.users.ensure_default_admin().await.unwrap();
    assert_eq!(again.id, app.admin.id);
    assert_eq!(again.role, UserRole::Admin);
    assert_eq!(app.services.users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_and_resolve_users() {
    let app = TestServices::new().await;

    let staff = app
        .services
        .users
        .register("budi", "Budi Santoso", UserRole::Staff)
        .await
        .unwrap();
    assert_eq!(app.services.users.resolve("budi").await.unwrap(), staff);

    let err = app
        .services
        .users
        .register("budi", "Budi Lain", UserRole::Staff)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Username sudah digunakan");

    let err = app.services.users.resolve("siti").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
