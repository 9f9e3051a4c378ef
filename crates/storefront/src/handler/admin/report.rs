use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use shared::{
    domain::{
        requests::ListingQuery,
        responses::{ApiResponse, ReportOverview},
    },
    errors::HttpError,
    view::track_request,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/reports/overview",
    tag = "Admin",
    responses(
        (status = 200, description = "Catalogue and moderation summary", body = ApiResponse<ReportOverview>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_report_overview(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let catalog = &state.di_container.catalog_clients;
    let console = &state.console;
    let everything = ListingQuery::default();

    let (products, reviews, service_reviews) = tokio::try_join!(
        track_request(&state.stores.products, catalog.find_products(&everything)),
        track_request(&console.reviews.store, console.reviews.client.find_all()),
        track_request(
            &console.service_reviews.store,
            console.service_reviews.client.find_all()
        ),
    )?;

    let overview = ReportOverview::build(&products, &reviews, &service_reviews);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Report generated successfully",
            overview,
        )),
    ))
}

pub fn report_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/reports/overview", get(get_report_overview))
        .with_state(app_state)
}
