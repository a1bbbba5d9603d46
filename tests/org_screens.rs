mod common;

use auditbridge_client::domain::{BidStatus, RequestStatus};
use auditbridge_client::screens::{CreateRequestScreen, MembersScreen, RequestBidsScreen, SitesScreen};
use auditbridge_client::ui::{Facet, ToastKind, Toaster};
use chrono::{TimeZone, Utc};
use common::{bid, open_request, MockBackend};
use rust_decimal::Decimal;
use serde_json::json;

#[tokio::test]
async fn add_site_posts_once_toasts_and_closes_modal() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/org/org-1/sites", 200, json!({ "data": [] }));
    backend.on(
        "POST",
        "/org/org-1/sites",
        201,
        json!({
            "id": "site-9",
            "orgId": "org-1",
            "name": "Tower B",
            "address": "12 Ring Road",
            "city": "Pune",
            "category": "RESIDENTIAL"
        }),
    );

    let toaster = Toaster::new();
    let mut screen = SitesScreen::new(backend.client(), toaster.clone(), "org-1");
    assert!(screen.load().await);

    screen.open_add_modal();
    screen.form.name = "Tower B".to_string();
    screen.form.address = "12 Ring Road".to_string();
    screen.form.city = "Pune".to_string();
    screen.form.category = "RESIDENTIAL".to_string();

    assert!(screen.add_site().await);

    let posts = backend.calls_to("POST", "/org/org-1/sites");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].body,
        Some(json!({
            "name": "Tower B",
            "address": "12 Ring Road",
            "city": "Pune",
            "category": "RESIDENTIAL"
        }))
    );

    assert!(!screen.add_modal_open);
    assert!(!screen.is_submitting);
    assert_eq!(screen.form, Default::default());
    assert_eq!(screen.list.len(), 1);
    assert_eq!(toaster.count(ToastKind::Success), 1);
    assert_eq!(toaster.count(ToastKind::Error), 0);
}

#[tokio::test]
async fn invalid_site_form_sends_nothing() {
    let backend = MockBackend::start().await;
    let toaster = Toaster::new();
    let mut screen = SitesScreen::new(backend.client(), toaster.clone(), "org-1");

    screen.open_add_modal();
    screen.form.name = "Tower B".to_string();

    assert!(!screen.add_site().await);
    assert!(screen.errors.has("address"));
    assert!(screen.errors.has("city"));
    assert!(screen.add_modal_open);
    assert!(backend.calls().is_empty());
    assert!(toaster.is_empty());
}

#[tokio::test]
async fn failed_add_site_keeps_modal_open() {
    let backend = MockBackend::start().await;
    backend.on(
        "POST",
        "/org/org-1/sites",
        409,
        json!({ "code": "CONFLICT", "message": "A site with this name already exists" }),
    );

    let toaster = Toaster::new();
    let mut screen = SitesScreen::new(backend.client(), toaster.clone(), "org-1");
    screen.open_add_modal();
    screen.form.name = "Tower A".to_string();
    screen.form.address = "1 Main St".to_string();
    screen.form.city = "Pune".to_string();
    screen.form.category = "RESIDENTIAL".to_string();

    assert!(!screen.add_site().await);
    assert!(screen.add_modal_open);
    assert!(!screen.is_submitting);
    assert_eq!(
        toaster.last().unwrap().message,
        "A site with this name already exists"
    );
}

#[tokio::test]
async fn sites_load_failure_keeps_previous_list() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/org/org-1/sites",
        200,
        json!([{ "id": "s1", "name": "Tower A", "address": "1 Main St", "city": "Pune" }]),
    );

    let toaster = Toaster::new();
    let mut screen = SitesScreen::new(backend.client(), toaster.clone(), "org-1");
    assert!(screen.load().await);
    assert_eq!(screen.list.len(), 1);

    backend.on("GET", "/org/org-1/sites", 500, json!({ "code": "INTERNAL_ERROR" }));
    assert!(!screen.load().await);

    assert!(!screen.list.is_loading);
    assert_eq!(screen.list.len(), 1);
    assert_eq!(toaster.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn members_filter_by_role() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/org/org-1/members",
        200,
        json!([
            { "id": "m1", "name": "Ravi", "email": "ravi@greenview.example", "role": "ORG_ADMIN" },
            { "id": "m2", "name": "Meera", "email": "meera@greenview.example", "role": "ORG_MEMBER" }
        ]),
    );

    let mut screen = MembersScreen::new(backend.client(), Toaster::new(), "org-1");
    assert!(screen.load().await);

    screen.list.filter.select(Facet::Role, "ORG_MEMBER");
    let names: Vec<_> = screen.list.visible().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Meera"]);
}

#[tokio::test]
async fn award_marks_winner_and_rejects_other_open_bids() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/requests/REQ-1", 200, open_request("REQ-1"));
    backend.on(
        "GET",
        "/requests/REQ-1/bids",
        200,
        json!([bid("b1", "SUBMITTED", 21000.0), bid("b2", "SUBMITTED", 18500.0), bid("b3", "WITHDRAWN", 15000.0)]),
    );
    backend.on("POST", "/requests/REQ-1/award", 204, json!(null));

    let toaster = Toaster::new();
    let mut screen = RequestBidsScreen::new(backend.client(), toaster.clone(), "REQ-1");
    assert!(screen.load().await);

    let by_price: Vec<_> = screen.bids_by_price().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(by_price, vec!["b3", "b2", "b1"]);
    assert_eq!(screen.lowest_open_bid().unwrap().id, "b2");

    assert!(screen.award("b2").await);

    let awards = backend.calls_to("POST", "/requests/REQ-1/award");
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].body, Some(json!({ "bidId": "b2" })));

    let status = |id: &str| screen.bids.iter().find(|b| b.id == id).unwrap().status.clone();
    assert_eq!(status("b2"), BidStatus::Awarded);
    assert_eq!(status("b1"), BidStatus::Rejected);
    assert_eq!(status("b3"), BidStatus::Withdrawn);
    assert_eq!(screen.request.as_ref().unwrap().status, RequestStatus::Awarded);
    assert_eq!(toaster.count(ToastKind::Success), 1);
}

#[tokio::test]
async fn award_of_unknown_bid_is_not_sent() {
    let backend = MockBackend::start().await;
    let toaster = Toaster::new();
    let mut screen = RequestBidsScreen::new(backend.client(), toaster.clone(), "REQ-1");

    assert!(!screen.award("missing").await);
    assert!(backend.calls().is_empty());
    assert_eq!(toaster.count(ToastKind::Error), 1);
}

#[tokio::test]
async fn partial_load_failure_keeps_the_half_that_loaded() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/requests/REQ-1", 200, open_request("REQ-1"));
    backend.on("GET", "/requests/REQ-1/bids", 503, json!({ "message": "Bids unavailable" }));

    let toaster = Toaster::new();
    let mut screen = RequestBidsScreen::new(backend.client(), toaster.clone(), "REQ-1");

    assert!(!screen.load().await);
    assert!(!screen.is_loading);
    assert!(screen.request.is_some());
    assert!(screen.bids.is_empty());
    assert_eq!(toaster.snapshot().len(), 1);
    assert_eq!(toaster.last().unwrap().message, "Bids unavailable");
}

#[tokio::test]
async fn publish_request_posts_form_and_keeps_created_request() {
    let backend = MockBackend::start().await;
    backend.on(
        "GET",
        "/org/org-1/sites",
        200,
        json!([{ "id": "site-1", "name": "Tower A", "address": "1 Main St", "city": "Pune" }]),
    );
    backend.on("POST", "/requests", 201, open_request("REQ-2"));

    let toaster = Toaster::new();
    let mut screen = CreateRequestScreen::new(backend.client(), toaster.clone(), "org-1");
    assert!(screen.load_sites().await);

    let now = Utc.with_ymd_and_hms(2099, 5, 1, 9, 0, 0).unwrap();
    screen.form.site_id = screen.sites.items[0].id.clone();
    screen.form.category = "FIRE_SAFETY".to_string();
    screen.form.title = "Fire safety audit".to_string();
    screen.form.window_start = Some(Utc.with_ymd_and_hms(2099, 5, 20, 9, 0, 0).unwrap());
    screen.form.window_end = Some(Utc.with_ymd_and_hms(2099, 5, 24, 18, 0, 0).unwrap());
    screen.form.bid_close_at = Some(Utc.with_ymd_and_hms(2099, 5, 15, 0, 0, 0).unwrap());
    screen.form.budget = Some(Decimal::new(25_000, 0));

    assert!(screen.submit_at(now).await);

    let posts = backend.calls_to("POST", "/requests");
    assert_eq!(posts.len(), 1);
    let body = posts[0].body.clone().unwrap();
    assert_eq!(body["siteId"], "site-1");
    assert_eq!(body["preferredWindow"]["start"], "2099-05-20T09:00:00Z");
    assert_eq!(body["bidCloseAt"], "2099-05-15T00:00:00Z");
    assert!(body.get("description").is_none());

    assert_eq!(screen.created.as_ref().unwrap().id, "REQ-2");
    assert!(screen.form.title.is_empty());
    assert_eq!(toaster.count(ToastKind::Success), 1);
}

#[tokio::test]
async fn request_closing_after_window_start_is_not_sent() {
    let backend = MockBackend::start().await;
    let mut screen = CreateRequestScreen::new(backend.client(), Toaster::new(), "org-1");

    let now = Utc.with_ymd_and_hms(2099, 5, 1, 9, 0, 0).unwrap();
    screen.form.site_id = "site-1".to_string();
    screen.form.category = "FIRE_SAFETY".to_string();
    screen.form.title = "Fire safety audit".to_string();
    screen.form.window_start = Some(Utc.with_ymd_and_hms(2099, 5, 20, 9, 0, 0).unwrap());
    screen.form.window_end = Some(Utc.with_ymd_and_hms(2099, 5, 24, 18, 0, 0).unwrap());
    screen.form.bid_close_at = Some(Utc.with_ymd_and_hms(2099, 5, 21, 0, 0, 0).unwrap());

    assert!(!screen.submit_at(now).await);
    assert!(screen.errors.has("bidCloseAt"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn add_site_in_flight_sends_nothing_more() {
    let backend = MockBackend::start().await;
    let toaster = Toaster::new();
    let mut screen = SitesScreen::new(backend.client(), toaster.clone(), "org-1");

    screen.open_add_modal();
    screen.form.name = "Tower B".to_string();
    screen.form.address = "12 Ring Road".to_string();
    screen.form.city = "Pune".to_string();
    screen.form.category = "RESIDENTIAL".to_string();
    screen.is_submitting = true;

    assert!(!screen.add_site().await);
    assert!(backend.calls().is_empty());
    assert!(screen.add_modal_open);
    assert!(toaster.is_empty());
}

#[tokio::test]
async fn award_in_flight_sends_nothing_more() {
    let backend = MockBackend::start().await;
    backend.on("GET", "/requests/REQ-1", 200, open_request("REQ-1"));
    backend.on("GET", "/requests/REQ-1/bids", 200, json!([bid("b1", "SUBMITTED", 21000.0)]));

    let mut screen = RequestBidsScreen::new(backend.client(), Toaster::new(), "REQ-1");
    assert!(screen.load().await);

    screen.is_submitting = true;
    assert!(!screen.award("b1").await);
    assert!(backend.calls_to("POST", "/requests/REQ-1/award").is_empty());
    assert_eq!(screen.bids[0].status, BidStatus::Submitted);
}

#[tokio::test]
async fn publish_in_flight_sends_nothing_more() {
    let backend = MockBackend::start().await;
    let mut screen = CreateRequestScreen::new(backend.client(), Toaster::new(), "org-1");

    let now = Utc.with_ymd_and_hms(2099, 5, 1, 9, 0, 0).unwrap();
    screen.form.site_id = "site-1".to_string();
    screen.form.category = "FIRE_SAFETY".to_string();
    screen.form.title = "Fire safety audit".to_string();
    screen.form.window_start = Some(Utc.with_ymd_and_hms(2099, 5, 20, 9, 0, 0).unwrap());
    screen.form.window_end = Some(Utc.with_ymd_and_hms(2099, 5, 24, 18, 0, 0).unwrap());
    screen.form.bid_close_at = Some(Utc.with_ymd_and_hms(2099, 5, 15, 0, 0, 0).unwrap());
    screen.is_submitting = true;

    assert!(!screen.submit_at(now).await);
    assert!(backend.calls().is_empty());
    assert!(screen.created.is_none());
}
