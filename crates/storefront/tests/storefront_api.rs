mod common;

use axum::http::StatusCode;
use common::{IMAGE_HOST, harness};
use serde_json::Value;

fn ids(page: &Value) -> Vec<&str> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn special_deals_are_sorted_cheapest_first_with_resolved_images() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/shop/special-deals").await;
    assert_eq!(status, StatusCode::OK);

    let page = &body["data"];
    assert_eq!(ids(page), vec!["p2", "p1"]);
    assert_eq!(
        page["items"][1]["images"][0],
        format!("{IMAGE_HOST}/uploads/shirt.jpg")
    );
    assert!(page["empty"].is_null());
}

#[tokio::test]
async fn query_refines_the_preset() {
    let h = harness(12).await;

    let (status, body) = h
        .get_json("/api/shop?category=apparel&sort=price-high")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"]), vec!["p3", "p1"]);
}

#[tokio::test]
async fn page_beyond_the_end_clamps_to_last_page() {
    let h = harness(2).await;

    let (status, body) = h.get_json("/api/shop?page=99").await;
    assert_eq!(status, StatusCode::OK);

    let pagination = &body["data"]["pagination"];
    assert_eq!(pagination["page"], 2);
    assert_eq!(pagination["total_pages"], 2);
    assert_eq!(pagination["has_next"], false);
    assert_eq!(ids(&body["data"]), vec!["p3"]);
}

#[tokio::test]
async fn no_matches_yield_an_explicit_empty_state() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/shop?search=nothing-like-this").await;
    assert_eq!(status, StatusCode::OK);

    let page = &body["data"];
    assert!(page["items"].as_array().unwrap().is_empty());
    assert_eq!(page["total_matched"], 0);
    assert_eq!(page["empty"]["title"], "No products found");
    assert_eq!(page["pagination"]["page"], 1);
}

#[tokio::test]
async fn unknown_sort_key_is_rejected() {
    let h = harness(12).await;

    let response = h
        .http
        .get(h.url("/api/shop?sort=cheapest"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn slow_earlier_response_does_not_overwrite_newer_listing() {
    let h = harness(12).await;

    let slow = {
        let http = h.http.clone();
        let url = h.url("/api/shop?search=slow");
        tokio::spawn(async move { http.get(url).send().await.unwrap().json::<Value>().await })
    };

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let (status, _) = h.get_json("/api/shop").await;
    assert_eq!(status, StatusCode::OK);

    let slow_body = slow.await.unwrap().unwrap();
    assert_eq!(ids(&slow_body["data"]), vec!["slow"]);

    let (_, snapshot) = h.get_json("/api/shop/state").await;
    assert_eq!(snapshot["phase"], "success");
    assert_eq!(snapshot["loading"], false);
    assert_eq!(snapshot["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn product_detail_lists_only_approved_reviews() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/products/p1").await;
    assert_eq!(status, StatusCode::OK);

    let detail = &body["data"];
    assert_eq!(detail["product"]["id"], "p1");
    assert_eq!(detail["review_count"], 1);
    assert_eq!(detail["reviews"][0]["id"], "r1");
    assert_eq!(detail["average_rating"], 5.0);
}

#[tokio::test]
async fn upstream_not_found_is_a_404_with_its_message() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/products/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn unsuccessful_envelope_is_surfaced_verbatim() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/categories").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Database unavailable");

    let (_, snapshot) = h.get_json("/api/categories/state").await;
    assert_eq!(snapshot["phase"], "failure");
    assert_eq!(snapshot["error"], "Database unavailable");
    assert_eq!(snapshot["loading"], false);
}

#[tokio::test]
async fn faqs_come_back_in_display_order() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/faqs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "f1");
    assert_eq!(body["data"][1]["id"], "f2");
}

#[tokio::test]
async fn known_tracking_number_shows_full_timeline() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/track/%20trk123456789%20").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["shipment"]["status"], "delivered");
    assert_eq!(data["progress"]["completed"], 6);
    assert_eq!(data["progress"]["total"], 6);
}

#[tokio::test]
async fn unknown_tracking_number_is_not_found() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/track/TRK000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No shipment found for tracking number TRK000000000"
    );
}

#[tokio::test]
async fn invalid_contact_never_reaches_the_api() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(
            reqwest::Method::POST,
            "/api/contact",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "not-an-email",
                "message": "Hello there, I have a question"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["details"]["email"].is_array());
    assert_eq!(
        h.upstream
            .contact_posts
            .load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn valid_contact_is_forwarded() {
    let h = harness(12).await;

    let (status, body) = h
        .send_json(
            reqwest::Method::POST,
            "/api/contact",
            Some(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Order",
                "message": "Where is my parcel right now?"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "m1");
    assert_eq!(
        h.upstream
            .contact_posts
            .load(std::sync::atomic::Ordering::SeqCst),
        1
    );
}

#[tokio::test]
async fn icon_picker_lists_kebab_case_names() {
    let h = harness(12).await;

    let (status, body) = h.get_json("/api/icons").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(names.contains(&"hand-heart"));
    assert!(names.contains(&"help-circle"));
}

#[tokio::test]
async fn metrics_expose_client_request_counters() {
    let h = harness(12).await;
    h.get_json("/api/shop").await;

    let text = h
        .http
        .get(h.url("/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(text.contains("catalog_service_client_request_counter"));
}
