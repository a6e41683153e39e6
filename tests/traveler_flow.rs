mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use entity::traveler::TravelerStatus;
use serde_json::json;

#[actix_web::test]
async fn test_join_trip_files_pending_request_and_notifies_host() {
    println!("\n\n[+] Running test: test_join_trip_files_pending_request_and_notifies_host");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (guest, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;

    let req = test::TestRequest::post()
        .uri(&format!("/trips/{}/travelers", trip.id))
        .insert_header(("Authorization", format!("Bearer {}", guest_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"]["trip_id"], trip.id);
    assert_eq!(body["results"]["traveler_id"], guest.id);
    assert_eq!(body["results"]["status"], "pending");
    assert!(body["results"]["approved_at"].is_null());

    let notes = ctx.db.list_notifications_for_user(host.id).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].message.contains("Lisbon"));
    assert!(!notes[0].read);
    println!("[/] Test passed: request pending, host notified.");
}

#[actix_web::test]
async fn test_host_cannot_join_own_trip() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;

    let req = test::TestRequest::post()
        .uri(&format!("/trips/{}/travelers", trip.id))
        .insert_header(("Authorization", format!("Bearer {}", host_token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.db.list_travelers_for_trip(trip.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_duplicate_join_request_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (_, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri(&format!("/trips/{}/travelers", trip.id))
            .insert_header(("Authorization", format!("Bearer {}", guest_token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }
    assert_eq!(ctx.db.list_travelers_for_trip(trip.id).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_join_missing_trip_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (_, token) = client.create_test_user(None).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/trips/9999/travelers")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/trips/9999/travelers").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_host_approves_request() {
    println!("\n\n[+] Running test: test_host_approves_request");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (guest, _) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, request.id))
        .insert_header(("Authorization", format!("Bearer {}", host_token)))
        .set_json(json!({ "status": "approved" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"]["status"], "approved");
    assert!(body["results"]["approved_at"].is_string());

    let stored = ctx.db.get_traveler(request.id).await.unwrap();
    assert_eq!(stored.status, TravelerStatus::Approved);
    assert!(stored.approved_at.is_some());

    let notes = ctx.db.list_notifications_for_user(guest.id).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].message.contains("approved"));

    let req = test::TestRequest::get()
        .uri(&format!("/trips/{}/travelers", trip.id))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["status"], "approved");
    println!("[/] Test passed: approved_at set, traveler notified.");
}

#[actix_web::test]
async fn test_traveler_cannot_approve_themself() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (guest, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    for status in ["approved", "declined", "pending"] {
        let req = test::TestRequest::put()
            .uri(&format!("/trips/{}/travelers/{}", trip.id, request.id))
            .insert_header(("Authorization", format!("Bearer {}", guest_token)))
            .set_json(json!({ "status": status }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    }

    let stored = ctx.db.get_traveler(request.id).await.unwrap();
    assert_eq!(stored.status, TravelerStatus::Pending);
    assert!(stored.approved_at.is_none());
}

#[actix_web::test]
async fn test_unknown_traveler_status_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (guest, _) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, request.id))
        .insert_header(("Authorization", format!("Bearer {}", host_token)))
        .set_json(json!({ "status": "maybe" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cancel_after_approval_clears_approved_at() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (guest, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();
    let approved = ctx
        .db
        .set_traveler_status(&trip, request, TravelerStatus::Approved)
        .await
        .unwrap();
    assert!(approved.approved_at.is_some());

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, approved.id))
        .insert_header(("Authorization", format!("Bearer {}", guest_token)))
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let stored = ctx.db.get_traveler(approved.id).await.unwrap();
    assert_eq!(stored.status, TravelerStatus::Cancelled);
    assert!(stored.approved_at.is_none());

    // Join notice plus the cancellation notice.
    assert_eq!(ctx.db.list_notifications_for_user(host.id).await.unwrap().len(), 2);

    // A cancelled request no longer blocks a fresh one.
    assert!(!ctx.db.has_open_request(trip.id, guest.id).await.unwrap());
    ctx.db.request_to_join(&trip, guest.id).await.unwrap();
}

#[actix_web::test]
async fn test_approval_respects_seat_limit() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (first, _) = client.create_test_user(None).await.unwrap();
    let (second, _) = client.create_test_user(None).await.unwrap();
    let trip = client
        .create_test_trip_from(host.id, test_data::sample_trip_with_seats(1))
        .await;

    let a = ctx.db.request_to_join(&trip, first.id).await.unwrap();
    let b = ctx.db.request_to_join(&trip, second.id).await.unwrap();

    let approve = |id: i32| {
        test::TestRequest::put()
            .uri(&format!("/trips/{}/travelers/{}", trip.id, id))
            .insert_header(("Authorization", format!("Bearer {}", host_token)))
            .set_json(json!({ "status": "approved" }))
            .to_request()
    };

    assert_eq!(test::call_service(&app, approve(a.id)).await.status(), StatusCode::OK);

    let resp = test::call_service(&app, approve(b.id)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CONFLICT");

    let stored = ctx.db.get_traveler(b.id).await.unwrap();
    assert_eq!(stored.status, TravelerStatus::Pending);
    assert!(ctx.db.list_notifications_for_user(second.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_request_from_other_trip_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (guest, _) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let other = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&other, guest.id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, request.id))
        .insert_header(("Authorization", format!("Bearer {}", host_token)))
        .set_json(json!({ "status": "approved" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_host_cannot_revive_cancelled_request() {
    println!("\n\n[+] Running test: test_host_cannot_revive_cancelled_request");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (guest, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;

    let first = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, first.id))
        .insert_header(("Authorization", format!("Bearer {}", guest_token)))
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let second = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let approve = |id: i32| {
        test::TestRequest::put()
            .uri(&format!("/trips/{}/travelers/{}", trip.id, id))
            .insert_header(("Authorization", format!("Bearer {}", host_token)))
            .set_json(json!({ "status": "approved" }))
            .to_request()
    };

    let resp = test::call_service(&app, approve(first.id)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CONFLICT");

    assert_eq!(test::call_service(&app, approve(second.id)).await.status(), StatusCode::OK);

    let approved: Vec<_> = ctx
        .db
        .list_travelers_for_trip(trip.id)
        .await
        .unwrap()
        .into_iter()
        .filter(|t| t.traveler_id == guest.id && t.status == TravelerStatus::Approved)
        .collect();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, second.id);
    assert_eq!(
        ctx.db.get_traveler(first.id).await.unwrap().status,
        TravelerStatus::Cancelled
    );
    println!("[/] Test passed: cancellation is final, one seat per guest.");
}

#[actix_web::test]
async fn test_declined_and_cancelled_are_final() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (guest, _) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;

    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();
    let declined = ctx
        .db
        .set_traveler_status(&trip, request, TravelerStatus::Declined)
        .await
        .unwrap();

    for next in [TravelerStatus::Approved, TravelerStatus::Pending, TravelerStatus::Cancelled] {
        let result = ctx.db.set_traveler_status(&trip, declined.clone(), next).await;
        assert!(matches!(result, Err(trip_share::types::error::AppError::Conflict(_))));
    }

    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();
    let cancelled = ctx
        .db
        .set_traveler_status(&trip, request, TravelerStatus::Cancelled)
        .await
        .unwrap();
    for next in [TravelerStatus::Approved, TravelerStatus::Declined, TravelerStatus::Pending] {
        let result = ctx.db.set_traveler_status(&trip, cancelled.clone(), next).await;
        assert!(matches!(result, Err(trip_share::types::error::AppError::Conflict(_))));
    }
}

#[actix_web::test]
async fn test_host_declines_then_guest_can_ask_again() {
    println!("\n\n[+] Running test: test_host_declines_then_guest_can_ask_again");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let app = test::init_service(client.create_app()).await;
    let (host, host_token) = client.create_test_user(None).await.unwrap();
    let (guest, guest_token) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/trips/{}/travelers/{}", trip.id, request.id))
        .insert_header(("Authorization", format!("Bearer {}", host_token)))
        .set_json(json!({ "status": "declined" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"]["status"], "declined");
    assert!(body["results"]["approved_at"].is_null());

    let notes = ctx.db.list_notifications_for_user(guest.id).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].message.contains("declined"));

    let req = test::TestRequest::post()
        .uri(&format!("/trips/{}/travelers", trip.id))
        .insert_header(("Authorization", format!("Bearer {}", guest_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["results"]["status"], "pending");
    assert_ne!(body["results"]["id"], request.id);
    println!("[/] Test passed: decline notifies and does not block a new request.");
}

#[actix_web::test]
async fn test_host_can_decline_an_approved_seat() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.keys.clone());
    let (host, _) = client.create_test_user(None).await.unwrap();
    let (guest, _) = client.create_test_user(None).await.unwrap();
    let trip = client.create_test_trip(host.id).await;
    let request = ctx.db.request_to_join(&trip, guest.id).await.unwrap();

    let approved = ctx
        .db
        .set_traveler_status(&trip, request, TravelerStatus::Approved)
        .await
        .unwrap();
    assert!(approved.approved_at.is_some());

    let declined = ctx
        .db
        .set_traveler_status(&trip, approved, TravelerStatus::Declined)
        .await
        .unwrap();
    assert_eq!(declined.status, TravelerStatus::Declined);
    assert!(declined.approved_at.is_none());
}
