use super::confirm_then_apply;
use crate::{
    abstract_trait::{DynReviewClient, ReviewResource},
    state::ResourceHandle,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use shared::{
    domain::{
        requests::ReviewListQuery,
        responses::{ApiResponse, EmptyState},
    },
    errors::HttpError,
    store::Mutation,
    view::{ListingController, PageCursor, paginate, track_request},
};

type ReviewHandle<R> = ResourceHandle<DynReviewClient<R>, R>;

pub async fn list_reviews<R: ReviewResource>(
    State(handle): State<ReviewHandle<R>>,
    Extension(listings): Extension<ListingController>,
    Query(query): Query<ReviewListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let reviews = track_request(&handle.store, handle.client.find_all()).await?;

    let queue: Vec<R> = reviews
        .into_iter()
        .filter(|review| query.status.is_none_or(|status| status.matches(review)))
        .collect();

    let page = paginate(
        &queue,
        PageCursor::new(listings.page_size()),
        query.page.unwrap_or(1),
        || EmptyState {
            title: format!("No {} records", R::LABEL),
            message: "Nothing is waiting in this queue.".to_string(),
        },
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} records fetched successfully", R::LABEL),
            page,
        )),
    ))
}

pub async fn get_review_state<R: ReviewResource>(
    State(handle): State<ReviewHandle<R>>,
) -> impl IntoResponse {
    let snapshot = handle.store.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

async fn moderate<R: ReviewResource>(
    handle: &ReviewHandle<R>,
    id: String,
    approve: bool,
) -> Result<R, HttpError> {
    let action = if approve { "approve" } else { "reject" };

    confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("{action} {} {id}", R::LABEL),
        async {
            if approve {
                handle.client.approve(&id).await
            } else {
                handle.client.reject(&id).await
            }
        },
        |review: &R| Mutation::Replace(review.clone()),
        || handle.client.find_all(),
    )
    .await
}

pub async fn approve_review<R: ReviewResource>(
    State(handle): State<ReviewHandle<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let review = moderate(&handle, id, true).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} approved", R::LABEL),
            review,
        )),
    ))
}

pub async fn reject_review<R: ReviewResource>(
    State(handle): State<ReviewHandle<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let review = moderate(&handle, id, false).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} rejected", R::LABEL),
            review,
        )),
    ))
}

pub async fn delete_review<R: ReviewResource>(
    State(handle): State<ReviewHandle<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("delete {} {id}", R::LABEL),
        handle.client.delete(&id),
        |_: &()| Mutation::Remove(id.clone()),
        || handle.client.find_all(),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} deleted successfully", R::LABEL),
            (),
        )),
    ))
}

pub fn review_routes<R: ReviewResource>(
    base: &str,
    handle: ReviewHandle<R>,
    listings: ListingController,
) -> Router {
    Router::new()
        .route(base, get(list_reviews::<R>))
        .route(&format!("{base}/state"), get(get_review_state::<R>))
        .route(&format!("{base}/{{id}}/approve"), put(approve_review::<R>))
        .route(&format!("{base}/{{id}}/reject"), put(reject_review::<R>))
        .route(&format!("{base}/{{id}}"), delete(delete_review::<R>))
        .layer(Extension(listings))
        .with_state(handle)
}
