use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::ListingQuery,
        responses::{ApiResponse, ListingPage, ProductDetail},
    },
    errors::HttpError,
    model::Product,
    view::{ListingPreset, RequestSnapshot, track_request},
};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

/// Fetches the preset's scope into the shared product state, then filters,
/// sorts and windows it for the visitor's query.
async fn render_listing(
    state: &AppState,
    preset: ListingPreset,
    query: ListingQuery,
) -> Result<ListingPage<Product>, HttpError> {
    let scoped = preset.scope(&query);
    let catalog = &state.di_container.catalog_clients;

    let products = track_request(&state.stores.products, catalog.find_products(&scoped)).await?;
    let page = state.listings.render(&products, &query, preset);

    info!(
        "Rendered {preset} page {} of {} ({} matched)",
        page.pagination.page, page.pagination.total_pages, page.total_matched
    );
    Ok(page)
}

async fn listing_response(
    state: &AppState,
    preset: ListingPreset,
    query: ListingQuery,
) -> Result<(StatusCode, Json<ApiResponse<ListingPage<Product>>>), HttpError> {
    let page = render_listing(state, preset, query).await?;
    let message = match &page.empty {
        Some(empty) => empty.title.clone(),
        None => "Products fetched successfully".to_string(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::success(message, page))))
}

#[utoipa::path(
    get,
    path = "/api/shop",
    tag = "Shop",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered, sorted and paginated products", body = ApiResponse<ListingPage<Product>>),
        (status = 400, description = "Malformed query"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_shop(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    listing_response(&state, ListingPreset::Shop, query).await
}

#[utoipa::path(
    get,
    path = "/api/shop/trending",
    tag = "Shop",
    params(ListingQuery),
    responses(
        (status = 200, description = "Trending products", body = ApiResponse<ListingPage<Product>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_trending(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    listing_response(&state, ListingPreset::Trending, query).await
}

#[utoipa::path(
    get,
    path = "/api/shop/new-arrivals",
    tag = "Shop",
    params(ListingQuery),
    responses(
        (status = 200, description = "Newest products first", body = ApiResponse<ListingPage<Product>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_new_arrivals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    listing_response(&state, ListingPreset::NewArrivals, query).await
}

#[utoipa::path(
    get,
    path = "/api/shop/best-sellers",
    tag = "Shop",
    params(ListingQuery),
    responses(
        (status = 200, description = "Best selling products", body = ApiResponse<ListingPage<Product>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_best_sellers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    listing_response(&state, ListingPreset::BestSellers, query).await
}

#[utoipa::path(
    get,
    path = "/api/shop/special-deals",
    tag = "Shop",
    params(ListingQuery),
    responses(
        (status = 200, description = "Discounted products, cheapest first", body = ApiResponse<ListingPage<Product>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_special_deals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    listing_response(&state, ListingPreset::SpecialDeals, query).await
}

#[utoipa::path(
    get,
    path = "/api/shop/state",
    tag = "Shop",
    responses(
        (status = 200, description = "Request state of the product list", body = RequestSnapshot<Vec<Product>>)
    )
)]
pub async fn get_product_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.stores.products.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Shop",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with its approved reviews", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let catalog = &state.di_container.catalog_clients;

    let (product, reviews) =
        tokio::try_join!(catalog.find_product(&id), catalog.find_product_reviews(&id))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Product fetched successfully",
            ProductDetail::new(product, reviews),
        )),
    ))
}

pub fn shop_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/shop", get(get_shop))
        .route("/api/shop/trending", get(get_trending))
        .route("/api/shop/new-arrivals", get(get_new_arrivals))
        .route("/api/shop/best-sellers", get(get_best_sellers))
        .route("/api/shop/special-deals", get(get_special_deals))
        .route("/api/shop/state", get(get_product_state))
        .route("/api/products/{id}", get(get_product))
        .with_state(app_state)
}
