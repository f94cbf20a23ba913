#![allow(clippy::unwrap_used)]
// Integration tests for `Session` and `Fleet` using wiremock.

use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use frota_core::{CoreError, Fleet, FleetConfig, SessionState};

// ── Helpers ─────────────────────────────────────────────────────────

fn config_for(server: &MockServer, token_cache: Option<std::path::PathBuf>) -> FleetConfig {
    FleetConfig {
        url: server.uri().parse().unwrap(),
        token_cache,
        poll_interval_secs: 0,
        ..FleetConfig::default()
    }
}

fn mock_login(server: &MockServer) -> impl std::future::Future<Output = ()> + '_ {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-123",
            "username": "ana",
            "message": "ok"
        })))
        .mount(server)
}

// ── Login / logout ──────────────────────────────────────────────────

#[tokio::test]
async fn login_flips_state_and_caches_token() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "Ana", "email": "ana@frota.test", "role": "ADMIN"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("token");
    let fleet = Fleet::oneshot(config_for(&server, Some(cache.clone()))).unwrap();
    let session = fleet.session();

    assert!(!session.is_authenticated().await);

    let user = session
        .login("ana@frota.test", &SecretString::from("secret"))
        .await
        .unwrap();

    assert_eq!(user.role, "ADMIN");
    assert!(session.is_authenticated().await);
    assert!(matches!(session.state(), SessionState::Authenticated(_)));
    assert_eq!(std::fs::read_to_string(&cache).unwrap(), "tok-123");
}

#[tokio::test]
async fn login_synthesizes_user_when_me_is_missing() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let user = fleet
        .session()
        .login("ana@frota.test", &SecretString::from("secret"))
        .await
        .unwrap();

    assert_eq!(user.name, "ana");
    assert_eq!(user.email, "ana@frota.test");
}

#[tokio::test]
async fn failed_login_leaves_session_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let session = fleet.session();

    let result = session
        .login("ana@frota.test", &SecretString::from("wrong"))
        .await;

    assert!(
        matches!(result, Err(CoreError::InvalidCredentials { .. })),
        "expected InvalidCredentials, got: {result:?}"
    );
    assert!(!session.is_authenticated().await);
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn logout_clears_even_when_backend_fails() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("token");
    let fleet = Fleet::oneshot(config_for(&server, Some(cache.clone()))).unwrap();
    let session = fleet.session();

    session
        .login("ana@frota.test", &SecretString::from("secret"))
        .await
        .unwrap();
    assert!(cache.exists());

    session.logout().await;

    assert!(!session.is_authenticated().await);
    assert!(!cache.exists());
    assert_eq!(session.state(), SessionState::Anonymous);
}

// ── Restore / validation ────────────────────────────────────────────

#[tokio::test]
async fn restore_adopts_valid_cached_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "Ana", "email": "ana@frota.test", "role": "USER"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("token");
    std::fs::write(&cache, "tok-cached").unwrap();

    let fleet = Fleet::oneshot(config_for(&server, Some(cache))).unwrap();
    assert!(fleet.session().restore().await);
    assert!(fleet.session().is_authenticated().await);
}

#[tokio::test]
async fn restore_discards_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("token");
    std::fs::write(&cache, "tok-stale").unwrap();

    let fleet = Fleet::oneshot(config_for(&server, Some(cache.clone()))).unwrap();
    assert!(!fleet.session().restore().await);
    assert!(!fleet.session().is_authenticated().await);
    assert!(!cache.exists());
}

#[tokio::test]
async fn restore_without_cache_file_is_anonymous() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let fleet = Fleet::oneshot(config_for(&server, Some(dir.path().join("token")))).unwrap();
    assert!(!fleet.session().restore().await);
}

// ── Session invalidation on 401 ─────────────────────────────────────

#[tokio::test]
async fn rejected_token_clears_session() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    fleet
        .session()
        .login("ana@frota.test", &SecretString::from("secret"))
        .await
        .unwrap();
    assert!(fleet.session().is_authenticated().await);

    let result = fleet.vehicles().await;
    assert!(
        matches!(result, Err(CoreError::NotAuthenticated)),
        "expected NotAuthenticated, got: {result:?}"
    );
    assert!(!fleet.session().is_authenticated().await);
    assert_eq!(fleet.session().state(), SessionState::Anonymous);
}

// ── Facade error mapping ────────────────────────────────────────────

#[tokio::test]
async fn missing_vehicle_maps_to_typed_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Vehicle not found"
        })))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let result = fleet.vehicle(404).await;

    match result {
        Err(CoreError::NotFound {
            ref entity_type,
            ref identifier,
        }) => {
            assert_eq!(entity_type, "vehicle");
            assert_eq!(identifier, "404");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn assign_and_unassign_ride_the_vehicle_update() {
    let server = MockServer::start().await;
    let vehicle = json!({
        "id": 5,
        "brand": "Renault",
        "model": "Master",
        "licensePlate": "AA-00-BB",
        "year": 2022,
        "fuelType": "DIESEL",
        "status": "AVAILABLE",
        "mileage": 81000.0,
        "driverId": 7
    });
    Mock::given(method("PUT"))
        .and(path("/api/vehicles/5"))
        .and(body_json(json!({ "driverId": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(vehicle.clone()))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let updated = fleet.assign_driver(5, 7).await.unwrap();
    assert_eq!(updated.driver_id, Some(7));

    server.reset().await;
    Mock::given(method("PUT"))
        .and(path("/api/vehicles/5"))
        .and(body_json(json!({ "driverId": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "brand": "Renault",
            "model": "Master",
            "licensePlate": "AA-00-BB",
            "year": 2022,
            "fuelType": "DIESEL",
            "status": "AVAILABLE",
            "mileage": 81000.0,
            "driverId": null
        })))
        .mount(&server)
        .await;

    let updated = fleet.unassign_driver(5).await.unwrap();
    assert_eq!(updated.driver_id, None);
}

// ── Notifier ────────────────────────────────────────────────────────

#[tokio::test]
async fn notifier_refresh_publishes_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "type": "MAINTENANCE_DUE",
            "priority": "HIGH",
            "title": "Service due",
            "createdAt": "2026-08-30T10:00:00Z",
            "isRead": false,
            "isExpired": false
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalNotifications": 10,
            "unreadCount": 1,
            "criticalCount": 0,
            "highPriorityCount": 1
        })))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let notifier = fleet.notifier();
    let mut feed_rx = notifier.subscribe();

    notifier.refresh().await.unwrap();

    let feed = feed_rx.borrow_and_update().clone();
    assert_eq!(feed.unread.len(), 1);
    assert_eq!(feed.unread_count(), 1);
    assert!(feed.fetched_at.is_some());
}

#[tokio::test]
async fn notifier_keeps_previous_feed_on_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let notifier = fleet.notifier();

    assert!(notifier.refresh().await.is_err());
    // Previous (default) snapshot survives the failed fetch.
    assert!(notifier.current().unread.is_empty());
}

#[tokio::test]
async fn overlapping_refreshes_collapse_to_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalNotifications": 0,
            "unreadCount": 0,
            "criticalCount": 0,
            "highPriorityCount": 0
        })))
        .mount(&server)
        .await;

    let fleet = Fleet::oneshot(config_for(&server, None)).unwrap();
    let notifier = fleet.notifier().clone();

    let background = {
        let notifier = notifier.clone();
        tokio::spawn(async move { notifier.refresh().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Lands while the first fetch is still in flight: dropped, not queued.
    notifier.refresh().await.unwrap();

    background.await.unwrap().unwrap();
    let unread_hits = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/api/notifications/unread")
        .count();
    assert_eq!(unread_hits, 1, "second refresh must not start a fetch");
}

#[tokio::test]
async fn notifier_task_stops_on_shutdown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut config = config_for(&server, None);
    config.poll_interval_secs = 1;
    let fleet = Fleet::new(config).unwrap();

    fleet.spawn_notifier().await;
    // Shutdown must cancel the poll loop and join the task promptly.
    tokio::time::timeout(Duration::from_secs(5), fleet.shutdown())
        .await
        .expect("shutdown should not hang");
}
