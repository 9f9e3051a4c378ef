mod common;

use axum::http::StatusCode;
use common::harness;
use reqwest::Method;
use serde_json::json;
use shared::view::Phase;
use std::sync::atomic::Ordering;

fn core_value(title: &str, icon: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "We mean it",
        "icon": icon,
        "color": "#e11d48"
    })
}

#[tokio::test]
async fn created_record_is_applied_once_confirmed() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(
            Method::POST,
            "/api/admin/core-values",
            Some(core_value("Care", "Heart")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "cv-new");

    let (_, snapshot) = h.get_json("/api/admin/core-values/state").await;
    assert_eq!(snapshot["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(snapshot["data"][0]["title"], "Care");
    assert!(snapshot["error"].is_null());
}

#[tokio::test]
async fn rejected_create_leaves_list_untouched_and_reports_server_message() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(
            Method::POST,
            "/api/admin/core-values",
            Some(core_value("Duplicate", "Heart")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Core value already exists");

    let (status, snapshot) = h.get_json("/api/admin/core-values/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["data"], json!([]));
    assert_eq!(snapshot["error"], "Core value already exists");
    assert_eq!(snapshot["loading"], false);
}

#[tokio::test]
async fn unknown_icon_fails_validation() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(
            Method::POST,
            "/api/admin/core-values",
            Some(core_value("Care", "Unicorn")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["icon"].is_array());
}

#[tokio::test]
async fn empty_collection_lists_with_empty_state() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/admin/core-values").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_matched"], 0);
    assert_eq!(body["data"]["empty"]["title"], "No core value records yet");
}

#[tokio::test]
async fn moderation_refetches_the_queue_after_confirmation() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(Method::PUT, "/api/admin/service-reviews/sr1/approve", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isApproved"], true);

    assert_eq!(h.upstream.service_review_lists.load(Ordering::SeqCst), 1);

    let (_, snapshot) = h.get_json("/api/admin/service-reviews/state").await;
    assert_eq!(snapshot["phase"], "success");
    assert_eq!(snapshot["data"][0]["isApproved"], true);

    let store = h.state.console.service_reviews.store.lock().await;
    assert_eq!(store.phase(), Phase::Success);
}

#[tokio::test]
async fn review_queue_filters_by_status() {
    let h = harness(12).await;

    let (_, pending) = h.get_json("/api/admin/service-reviews?status=pending").await;
    assert_eq!(pending["data"]["total_matched"], 1);

    let (_, approved) = h
        .get_json("/api/admin/service-reviews?status=approved")
        .await;
    assert_eq!(approved["data"]["total_matched"], 0);
}

#[tokio::test]
async fn report_overview_summarises_catalogue_and_queues() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/admin/reports/overview").await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let overview = &body["data"];
    assert_eq!(overview["total_products"], 3);
    assert_eq!(overview["special_deals"], 2);
    assert_eq!(overview["service_reviews"]["pending"], 1);
}

#[tokio::test]
async fn console_routes_are_documented() {
    let h = harness(12).await;

    let (status, doc) = h.get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = &doc["paths"];
    assert!(paths["/api/admin/core-values"]["post"].is_object());
    assert!(paths["/api/admin/sustainability/{id}"]["delete"].is_object());
    assert!(paths["/api/admin/reviews/{id}/approve"]["put"].is_object());
    assert!(paths["/api/admin/contacts/state"]["get"].is_object());
    assert!(paths["/api/faqs/state"]["get"].is_object());
}
