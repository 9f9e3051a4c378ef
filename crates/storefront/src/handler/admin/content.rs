use super::confirm_then_apply;
use crate::{abstract_trait::DynContentClient, middleware::validate::SimpleValidatedJson, state::ResourceHandle};
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    domain::{
        requests::PageQuery,
        responses::{ApiResponse, EmptyState},
    },
    errors::HttpError,
    model::ContentBlock,
    store::Mutation,
    view::{ListingController, PageCursor, paginate, track_request},
};

type ContentHandle<T> = ResourceHandle<DynContentClient<T>, T>;

pub async fn list_content<T: ContentBlock>(
    State(handle): State<ContentHandle<T>>,
    Extension(listings): Extension<ListingController>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let items = track_request(&handle.store, handle.client.find_all()).await?;

    let page = paginate(
        &items,
        PageCursor::new(listings.page_size()),
        query.page.unwrap_or(1),
        || EmptyState {
            title: format!("No {} records yet", T::KIND.label()),
            message: "Create the first one to see it here.".to_string(),
        },
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} records fetched successfully", T::KIND.label()),
            page,
        )),
    ))
}

/// The console's `{data, loading, error}` view of the collection.
pub async fn get_content_state<T: ContentBlock>(
    State(handle): State<ContentHandle<T>>,
) -> impl IntoResponse {
    let snapshot = handle.store.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

pub async fn create_content<T: ContentBlock>(
    State(handle): State<ContentHandle<T>>,
    SimpleValidatedJson(body): SimpleValidatedJson<T::Draft>,
) -> Result<impl IntoResponse, HttpError> {
    let created = confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("create {}", T::KIND.label()),
        handle.client.create(&body),
        |created: &T| Mutation::Insert(created.clone()),
        || handle.client.find_all(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            format!("{} created successfully", T::KIND.label()),
            created,
        )),
    ))
}

pub async fn update_content<T: ContentBlock>(
    State(handle): State<ContentHandle<T>>,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<T::Draft>,
) -> Result<impl IntoResponse, HttpError> {
    let updated = confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("update {} {id}", T::KIND.label()),
        handle.client.update(&id, &body),
        |updated: &T| Mutation::Replace(updated.clone()),
        || handle.client.find_all(),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} updated successfully", T::KIND.label()),
            updated,
        )),
    ))
}

pub async fn delete_content<T: ContentBlock>(
    State(handle): State<ContentHandle<T>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("delete {} {id}", T::KIND.label()),
        handle.client.delete(&id),
        |_: &()| Mutation::Remove(id.clone()),
        || handle.client.find_all(),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            format!("{} deleted successfully", T::KIND.label()),
            (),
        )),
    ))
}

pub fn content_routes<T: ContentBlock>(
    handle: ContentHandle<T>,
    listings: ListingController,
) -> Router {
    let collection = format!("/api/admin/{}", T::KIND);
    let record = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, get(list_content::<T>).post(create_content::<T>))
        .route(&format!("{collection}/state"), get(get_content_state::<T>))
        .route(&record, put(update_content::<T>).delete(delete_content::<T>))
        .layer(Extension(listings))
        .with_state(handle)
}
