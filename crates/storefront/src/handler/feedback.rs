use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use shared::{
    domain::{
        requests::{ContactDraft, ServiceReviewDraft},
        responses::ApiResponse,
    },
    errors::HttpError,
    model::{ContactSubmission, ServiceReview},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Feedback",
    request_body = ContactDraft,
    responses(
        (status = 201, description = "Message received", body = ApiResponse<ContactSubmission>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<ContactDraft>,
) -> Result<impl IntoResponse, HttpError> {
    let submission = state
        .di_container
        .feedback_clients
        .submit_contact(&body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Thank you for reaching out, we will get back to you soon",
            submission,
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/service-reviews",
    tag = "Feedback",
    request_body = ServiceReviewDraft,
    responses(
        (status = 201, description = "Review submitted for moderation", body = ApiResponse<ServiceReview>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn submit_service_review(
    State(state): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<ServiceReviewDraft>,
) -> Result<impl IntoResponse, HttpError> {
    let review = state
        .di_container
        .feedback_clients
        .submit_service_review(&body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Thank you for your review, it will appear once approved",
            review,
        )),
    ))
}

pub fn feedback_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/service-reviews", post(submit_service_review))
        .with_state(app_state)
}
