use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::responses::ApiResponse,
    errors::HttpError,
    icons::Icon,
    model::{Category, Faq, SubCategory},
    view::{RequestSnapshot, track_request},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "All product categories", body = ApiResponse<Vec<Category>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let catalog = &state.di_container.catalog_clients;
    let categories = track_request(&state.stores.categories, catalog.find_categories()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Categories fetched successfully",
            categories,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/subcategories",
    tag = "Catalog",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Sub-categories of a category", body = ApiResponse<Vec<SubCategory>>),
        (status = 404, description = "Category not found"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_subcategories(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let subcategories = state
        .di_container
        .catalog_clients
        .find_subcategories(&id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Sub-categories fetched successfully",
            subcategories,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "Catalog",
    responses(
        (status = 200, description = "Frequently asked questions in display order", body = ApiResponse<Vec<Faq>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_faqs(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, HttpError> {
    let catalog = &state.di_container.catalog_clients;
    let faqs = track_request(&state.stores.faqs, catalog.find_faqs()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("FAQs fetched successfully", faqs)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "A single FAQ", body = ApiResponse<Faq>),
        (status = 404, description = "FAQ not found")
    )
)]
pub async fn get_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let faq = state.di_container.catalog_clients.find_faq(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("FAQ fetched successfully", faq)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories/state",
    tag = "Catalog",
    responses(
        (status = 200, description = "Request state of the category list", body = RequestSnapshot<Vec<Category>>)
    )
)]
pub async fn get_category_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.stores.categories.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/api/faqs/state",
    tag = "Catalog",
    responses(
        (status = 200, description = "Request state of the FAQ list", body = RequestSnapshot<Vec<Faq>>)
    )
)]
pub async fn get_faq_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.stores.faqs.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/api/icons",
    tag = "Catalog",
    responses(
        (status = 200, description = "Icon names accepted by content blocks", body = ApiResponse<Vec<Icon>>)
    )
)]
pub async fn get_icons() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success("Icons fetched successfully", Icon::all())),
    )
}

pub fn catalog_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/state", get(get_category_state))
        .route("/api/categories/{id}/subcategories", get(get_subcategories))
        .route("/api/faqs", get(get_faqs))
        .route("/api/faqs/state", get(get_faq_state))
        .route("/api/faqs/{id}", get(get_faq))
        .route("/api/icons", get(get_icons))
        .with_state(app_state)
}
