mod admin;
mod catalog;
mod feedback;
mod shop;
mod tracking;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::{console_openapi, console_routes, contact_routes, report_routes};
pub use self::catalog::catalog_routes;
pub use self::feedback::feedback_routes;
pub use self::shop::shop_routes;
pub use self::tracking::{TrackingView, tracking_routes};

#[derive(OpenApi)]
#[openapi(
    paths(
        shop::get_shop,
        shop::get_trending,
        shop::get_new_arrivals,
        shop::get_best_sellers,
        shop::get_special_deals,
        shop::get_product_state,
        shop::get_product,

        catalog::get_categories,
        catalog::get_subcategories,
        catalog::get_faqs,
        catalog::get_faq,
        catalog::get_category_state,
        catalog::get_faq_state,
        catalog::get_icons,

        tracking::track_order,

        feedback::submit_contact,
        feedback::submit_service_review,

        admin::contact::get_contacts,
        admin::contact::get_contact_state,
        admin::contact::delete_contact,
        admin::report::get_report_overview,
    ),
    tags(
        (name = "Shop", description = "Product listing endpoints"),
        (name = "Catalog", description = "Categories, FAQs and icons"),
        (name = "Tracking", description = "Order tracking"),
        (name = "Feedback", description = "Contact and service review submissions"),
        (name = "Admin", description = "Superadmin console endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .map(IntoResponse::into_response)
        .unwrap_or_else(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
}

pub struct AppRouter;

impl AppRouter {
    /// The full application: documented routes, console routes, Swagger UI.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(shop_routes(shared_state.clone()))
            .merge(catalog_routes(shared_state.clone()))
            .merge(tracking_routes())
            .merge(feedback_routes(shared_state.clone()))
            .merge(contact_routes(shared_state.clone()))
            .merge(report_routes(shared_state.clone()));

        let (app_router, mut api) = api_router.split_for_parts();
        api.merge(console_openapi());

        app_router
            .merge(console_routes(shared_state))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("Swagger UI: http://localhost:{port}/swagger-ui");
        info!("Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
