use axum::{Json, extract::Path, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use shared::{
    domain::responses::ApiResponse,
    errors::HttpError,
    tracking::{self, TrackingInfo, TrackingProgress},
};
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackingView {
    pub shipment: TrackingInfo,
    pub progress: TrackingProgress,
}

#[utoipa::path(
    get,
    path = "/api/track/{tracking_number}",
    tag = "Tracking",
    params(("tracking_number" = String, Path, description = "Tracking number, e.g. TRK123456789")),
    responses(
        (status = 200, description = "Shipment timeline", body = ApiResponse<TrackingView>),
        (status = 404, description = "Unknown tracking number")
    )
)]
pub async fn track_order(
    Path(tracking_number): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let shipment = tracking::lookup(&tracking_number).ok_or_else(|| {
        info!("No shipment for tracking number {tracking_number}");
        HttpError::NotFound(format!(
            "No shipment found for tracking number {}",
            tracking_number.trim()
        ))
    })?;

    let progress = shipment.progress();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("Shipment {} is {}", shipment.tracking_number, shipment.status),
            TrackingView { shipment, progress },
        )),
    ))
}

pub fn tracking_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/api/track/{tracking_number}", get(track_order))
}
