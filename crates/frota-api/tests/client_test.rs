#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use chrono::NaiveDate;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use frota_api::types::{
    LoginRequest, MaintenanceStatus, NotificationPriority, PageQuery, VehicleStatus, VehicleUpdate,
};
use frota_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn sample_vehicle(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "brand": "Renault",
        "model": "Master",
        "licensePlate": "AA-00-BB",
        "year": 2022,
        "fuelType": "DIESEL",
        "status": "AVAILABLE",
        "mileage": 81000.0,
        "lastMaintenance": "2026-03-10",
        "nextMaintenance": "2026-09-10",
        "driverId": null,
        "createdAt": null,
        "updatedAt": null
    })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token-here",
            "username": "ana",
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let resp = client
        .login(&LoginRequest {
            email: "ana@frota.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(resp.token, "jwt-token-here");
    assert_eq!(resp.username, "ana");
}

#[tokio::test]
async fn test_login_failure_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client
        .login(&LoginRequest {
            email: "ana@frota.test".into(),
            password: "wrong".into(),
        })
        .await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_bearer_token_attached_after_set() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .and(header("authorization", "Bearer jwt-token-here"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_vehicle(1)])))
        .mount(&server)
        .await;

    client
        .set_token(SecretString::from("jwt-token-here"))
        .await;
    let vehicles = client.list_vehicles().await.unwrap();
    assert_eq!(vehicles.len(), 1);
}

#[tokio::test]
async fn test_validate_token_false_on_401() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(!client.validate_token().await.unwrap());
}

// ── Vehicle tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_vehicles() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([sample_vehicle(1), sample_vehicle(2)])),
        )
        .mount(&server)
        .await;

    let vehicles = client.list_vehicles().await.unwrap();

    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].license_plate, "AA-00-BB");
    assert_eq!(vehicles[0].status, VehicleStatus::Available);
}

#[tokio::test]
async fn test_vehicles_by_status_uses_wire_form() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vehicles/status/OUT_OF_SERVICE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let vehicles = client
        .list_vehicles_by_status(VehicleStatus::OutOfService)
        .await
        .unwrap();
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn test_partial_update_sends_only_set_fields() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/vehicles/5"))
        .and(body_json(json!({ "mileage": 90000.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_vehicle(5)))
        .mount(&server)
        .await;

    let update = VehicleUpdate {
        mileage: Some(90_000.0),
        ..VehicleUpdate::default()
    };
    client.update_vehicle(5, &update).await.unwrap();
}

#[tokio::test]
async fn test_driver_assignment_rides_the_update_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/vehicles/5"))
        .and(body_json(json!({ "driverId": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_vehicle(5)))
        .mount(&server)
        .await;

    let update = VehicleUpdate {
        driver_id: Some(Some(7)),
        ..VehicleUpdate::default()
    };
    client.update_vehicle(5, &update).await.unwrap();
}

#[tokio::test]
async fn test_driver_unassignment_sends_explicit_null() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/vehicles/5"))
        .and(body_json(json!({ "driverId": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_vehicle(5)))
        .mount(&server)
        .await;

    let update = VehicleUpdate {
        driver_id: Some(None),
        ..VehicleUpdate::default()
    };
    client.update_vehicle(5, &update).await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_with_multibyte_cutoff_is_an_error() {
    let (server, client) = setup().await;

    // 199 ASCII bytes, then a two-byte char straddling the preview
    // cutoff. Must come back as a typed error, not a panic.
    let mut body = "x".repeat(199);
    body.push('é');
    body.push_str(" trailing junk");
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let result = client.list_vehicles().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_get_missing_vehicle_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vehicles/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Vehicle not found"
        })))
        .mount(&server)
        .await;

    let result = client.get_vehicle(999).await;

    match result {
        Err(ref e) => assert!(e.is_not_found(), "expected not-found, got: {result:?}"),
        Ok(_) => panic!("expected error"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_unauthorized_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_vehicles().await;

    assert!(
        matches!(result, Err(Error::Unauthorized)),
        "expected Unauthorized, got: {result:?}"
    );
}

// ── Driver tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_deleting_a_driver_does_not_cascade_to_vehicles() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/drivers/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut vehicle = sample_vehicle(5);
    vehicle["driverId"] = json!(3);
    Mock::given(method("GET"))
        .and(path("/api/vehicles/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vehicle))
        .mount(&server)
        .await;

    client.delete_driver(3).await.unwrap();

    // No client-side cascade: the vehicle keeps its dangling driver id
    // until the backend serves a fresh record.
    let vehicle = client.get_vehicle(5).await.unwrap();
    assert_eq!(vehicle.driver_id, Some(3));
}

// ── Maintenance tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_maintenances_passes_page_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/maintenances"))
        .and(query_param("page", "2"))
        .and(query_param("size", "25"))
        .and(query_param("sortBy", "scheduledDate"))
        .and(query_param("sortDir", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [],
            "totalElements": 0,
            "totalPages": 0,
            "number": 2,
            "size": 25
        })))
        .mount(&server)
        .await;

    let page = client
        .list_maintenances(&PageQuery {
            page: 2,
            size: 25,
            sort_by: "scheduledDate".into(),
            sort_dir: "asc".into(),
        })
        .await
        .unwrap();

    assert_eq!(page.number, 2);
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn test_malformed_page_degrades_to_empty() {
    let (server, client) = setup().await;

    // Backend occasionally replies without the pagination wrapper fields.
    Mock::given(method("GET"))
        .and(path("/api/maintenances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let page = client.list_maintenances(&PageQuery::default()).await.unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
async fn test_maintenance_lifecycle_transitions() {
    let (server, client) = setup().await;

    let ticket = json!({
        "id": 11,
        "vehicleId": 5,
        "type": "CORRECTIVE",
        "description": "Brake pads",
        "cost": 240.0,
        "status": "IN_PROGRESS",
        "scheduledDate": "2026-08-20",
        "completedDate": null,
        "mechanicName": "J. Silva",
        "notes": null,
        "createdAt": null,
        "updatedAt": null
    });

    Mock::given(method("PATCH"))
        .and(path("/api/maintenances/11/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&ticket))
        .mount(&server)
        .await;

    let started = client.start_maintenance(11).await.unwrap();
    assert_eq!(started.status, MaintenanceStatus::InProgress);
}

// ── Notification tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_unread_count() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/unread/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(4)))
        .mount(&server)
        .await;

    assert_eq!(client.unread_count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_mark_notification_read() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/notifications/9/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "type": "LOW_FUEL",
            "priority": "HIGH",
            "title": "Low fuel",
            "message": "Vehicle AA-00-BB below 15%",
            "entityType": "VEHICLE",
            "entityId": 1,
            "createdAt": "2026-08-30T08:00:00Z",
            "readAt": "2026-08-30T09:30:00Z",
            "isRead": true,
            "actionUrl": null,
            "expiresAt": null,
            "isExpired": false
        })))
        .mount(&server)
        .await;

    let read = client.mark_notification_read(9).await.unwrap();
    assert!(read.is_read);
    assert!(read.read_at.is_some());
    assert_eq!(read.priority, NotificationPriority::High);
}

#[tokio::test]
async fn test_scheduled_maintenances_pass_date_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/maintenances/scheduled"))
        .and(query_param("startDate", "2026-09-01"))
        .and(query_param("endDate", "2026-09-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let tickets = client
        .list_scheduled_maintenances(
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        )
        .await
        .unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn test_unread_paged_passes_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/unread/paged"))
        .and(query_param("page", "1"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [],
            "totalElements": 12,
            "totalPages": 3,
            "number": 1,
            "size": 5
        })))
        .mount(&server)
        .await;

    let page = client.list_unread_paged(1, 5).await.unwrap();
    assert_eq!(page.total_elements, 12);
    assert_eq!(page.size, 5);
}

#[tokio::test]
async fn test_notification_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/notifications/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalNotifications": 42,
            "unreadCount": 7,
            "criticalCount": 1,
            "highPriorityCount": 3
        })))
        .mount(&server)
        .await;

    let stats = client.notification_stats().await.unwrap();
    assert_eq!(stats.unread_count, 7);
    assert_eq!(stats.critical_count, 1);
}

// ── Error shape tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_backend_message_surfaces_in_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "licensePlate already registered"
        })))
        .mount(&server)
        .await;

    let draft = frota_api::types::VehicleDraft {
        brand: "Renault".into(),
        model: "Master".into(),
        license_plate: "AA-00-BB".into(),
        year: 2022,
        fuel_type: frota_api::types::FuelType::Diesel,
        status: VehicleStatus::Available,
        mileage: 0.0,
        last_maintenance: None,
        next_maintenance: None,
        driver_id: None,
    };
    let result = client.create_vehicle(&draft).await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("licensePlate"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_body_reports_deserialization_with_preview() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let result = client.list_vehicles().await;

    match result {
        Err(Error::Deserialization { ref message, .. }) => {
            assert!(message.contains("proxy error"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_patch_bodies_are_empty_objects() {
    let (server, client) = setup().await;

    let assert_body = |req: &Request| {
        assert_eq!(req.body, b"{}");
    };

    Mock::given(method("PATCH"))
        .and(path("/api/notifications/read-all"))
        .respond_with(move |req: &Request| {
            assert_body(req);
            ResponseTemplate::new(204)
        })
        .mount(&server)
        .await;

    client.mark_all_notifications_read().await.unwrap();
}
