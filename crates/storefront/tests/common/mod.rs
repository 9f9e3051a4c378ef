#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use prometheus_client::registry::Registry;
use serde_json::{Value, json};
use shared::config::ApiConfig;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};
use storefront::{di::DependenciesInject, handler::AppRouter, service::HttpApiClient, state::AppState};
use tokio::{net::TcpListener, sync::Mutex};

pub const IMAGE_HOST: &str = "https://cdn.example.com";

/// Counters the fake commerce API keeps so tests can see what reached it.
#[derive(Default)]
pub struct Upstream {
    pub contact_posts: AtomicUsize,
    pub service_review_lists: AtomicUsize,
    pub service_review_approved: AtomicBool,
    pub flaky_gets: AtomicUsize,
    pub flaky_posts: AtomicUsize,
}

pub struct Harness {
    pub base: String,
    pub state: AppState,
    pub upstream: Arc<Upstream>,
    pub http: reqwest::Client,
}

impl Harness {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self.http.get(self.url(path)).send().await.unwrap();
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        (status, response.json().await.unwrap())
    }

    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.unwrap();
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        (status, response.json().await.unwrap())
    }
}

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn api_config(upstream: SocketAddr) -> ApiConfig {
    let mut config = ApiConfig::new(format!("http://{upstream}/api"));
    config.image_url = IMAGE_HOST.to_string();
    config.timeout = Duration::from_secs(5);
    config.max_retries = 0;
    config
}

/// Fake commerce API plus a storefront wired to it, both on ephemeral ports.
pub async fn harness(page_size: usize) -> Harness {
    let upstream = Arc::new(Upstream::default());
    let upstream_addr = spawn(fake_api(upstream.clone())).await;

    let client = HttpApiClient::new(&api_config(upstream_addr)).unwrap();
    let registry = Arc::new(Mutex::new(Registry::default()));
    let di_container = DependenciesInject::new(client, registry.clone()).await;
    let state = AppState::from_parts(di_container, page_size, registry);

    let addr = spawn(AppRouter::build(state.clone())).await;

    Harness {
        base: format!("http://{addr}"),
        state,
        upstream,
        http: reqwest::Client::new(),
    }
}

fn ok(data: Value) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

pub fn catalogue() -> Value {
    json!([
        {
            "_id": "p1",
            "name": "Linen Shirt",
            "price": 40.0,
            "discountPrice": 30.0,
            "category": { "_id": "c1", "name": "Apparel", "slug": "apparel" },
            "images": ["/uploads/shirt.jpg"],
            "rating": 4.5,
            "tags": ["summer"],
            "isTrending": true,
            "isSpecialDeal": true,
            "createdAt": "2024-03-01T00:00:00Z"
        },
        {
            "_id": "p2",
            "name": "Canvas Tote",
            "price": 25.0,
            "category": "c2",
            "rating": 4.0,
            "isSpecialDeal": true,
            "createdAt": "2024-05-01T00:00:00Z"
        },
        {
            "_id": "p3",
            "name": "Wool Scarf",
            "price": 60.0,
            "category": { "_id": "c1", "name": "Apparel", "slug": "apparel" },
            "rating": 4.8,
            "isBestSeller": true,
            "createdAt": "2024-01-15T00:00:00Z"
        }
    ])
}

fn service_review(approved: bool) -> Value {
    json!({
        "_id": "sr1",
        "name": "Grace",
        "rating": 5,
        "text": "Fast delivery",
        "isApproved": approved
    })
}

pub fn fake_api(upstream: Arc<Upstream>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                if params.get("search").map(String::as_str) == Some("slow") {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    return ok(json!([{
                        "_id": "slow",
                        "name": "Slow Poke",
                        "price": 10.0,
                        "category": "c3"
                    }]));
                }
                ok(catalogue())
            }),
        )
        .route(
            "/api/products/{id}",
            get(|Path(id): Path<String>| async move {
                match catalogue()
                    .as_array()
                    .and_then(|items| items.iter().find(|p| p["_id"] == id.as_str()))
                {
                    Some(product) => ok(product.clone()),
                    None => fail(StatusCode::NOT_FOUND, "Product not found"),
                }
            }),
        )
        .route(
            "/api/reviews/product/{id}",
            get(|Path(id): Path<String>| async move {
                ok(json!([
                    { "_id": "r1", "rating": 5, "comment": "Great", "isApproved": true, "product": &id },
                    { "_id": "r2", "rating": 1, "comment": "Spam", "isApproved": false, "product": &id }
                ]))
            }),
        )
        .route(
            "/api/reviews",
            get(|| async {
                ok(json!([
                    { "_id": "r1", "rating": 5, "comment": "Great", "isApproved": true, "product": "p1" },
                    { "_id": "r2", "rating": 1, "comment": "Spam", "reportCount": 3, "product": "p1" }
                ]))
            }),
        )
        .route(
            "/api/categories",
            get(|| async {
                (
                    StatusCode::OK,
                    Json(json!({ "success": false, "message": "Database unavailable" })),
                )
                    .into_response()
            }),
        )
        .route(
            "/api/faqs",
            get(|| async {
                ok(json!([
                    { "_id": "f2", "question": "Returns?", "answer": "30 days", "order": 2 },
                    { "_id": "f1", "question": "Shipping?", "answer": "Worldwide", "order": 1 }
                ]))
            }),
        )
        .route(
            "/api/contacts",
            get(|| async { ok(json!([])) }).post(
                |State(up): State<Arc<Upstream>>, Json(body): Json<Value>| async move {
                    up.contact_posts.fetch_add(1, Ordering::SeqCst);
                    let mut record = body;
                    record["_id"] = json!("m1");
                    ok(record)
                },
            ),
        )
        .route(
            "/api/core-values",
            get(|| async { ok(json!([])) }).post(|Json(body): Json<Value>| async move {
                if body["title"] == "Duplicate" {
                    return fail(StatusCode::CONFLICT, "Core value already exists");
                }
                let mut record = body;
                record["_id"] = json!("cv-new");
                ok(record)
            }),
        )
        .route(
            "/api/service-reviews",
            get(|State(up): State<Arc<Upstream>>| async move {
                up.service_review_lists.fetch_add(1, Ordering::SeqCst);
                let approved = up.service_review_approved.load(Ordering::SeqCst);
                ok(json!([service_review(approved)]))
            }),
        )
        .route(
            "/api/service-reviews/{id}/approve",
            put(|State(up): State<Arc<Upstream>>| async move {
                up.service_review_approved.store(true, Ordering::SeqCst);
                ok(service_review(true))
            }),
        )
        .route(
            "/api/flaky",
            get(|State(up): State<Arc<Upstream>>| async move {
                if up.flaky_gets.fetch_add(1, Ordering::SeqCst) < 2 {
                    return fail(StatusCode::SERVICE_UNAVAILABLE, "try again");
                }
                ok(json!([1, 2, 3]))
            })
            .post(|State(up): State<Arc<Upstream>>| async move {
                up.flaky_posts.fetch_add(1, Ordering::SeqCst);
                fail(StatusCode::SERVICE_UNAVAILABLE, "try again")
            }),
        )
        .with_state(upstream)
}
