use super::confirm_then_apply;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use shared::{
    domain::{
        requests::PageQuery,
        responses::{ApiResponse, EmptyState, ListingPage},
    },
    errors::HttpError,
    model::ContactSubmission,
    store::Mutation,
    view::{PageCursor, RequestSnapshot, paginate, track_request},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "Admin",
    params(PageQuery),
    responses(
        (status = 200, description = "Contact submissions, newest first", body = ApiResponse<ListingPage<ContactSubmission>>),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn get_contacts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let handle = &state.console.contacts;
    let mut contacts = track_request(&handle.store, handle.client.find_contacts()).await?;
    contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let page = paginate(
        &contacts,
        PageCursor::new(state.listings.page_size()),
        query.page.unwrap_or(1),
        || EmptyState {
            title: "No messages yet".to_string(),
            message: "Contact form submissions will show up here.".to_string(),
        },
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Contact submissions fetched successfully",
            page,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts/state",
    tag = "Admin",
    responses(
        (status = 200, description = "Request state of the contact inbox", body = RequestSnapshot<Vec<ContactSubmission>>)
    )
)]
pub async fn get_contact_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.console.contacts.store.lock().await.snapshot();
    (StatusCode::OK, Json(snapshot))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = "Admin",
    params(("id" = String, Path, description = "Contact submission id")),
    responses(
        (status = 200, description = "Contact submission deleted"),
        (status = 404, description = "Contact submission not found"),
        (status = 502, description = "Commerce API error")
    )
)]
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let handle = &state.console.contacts;

    confirm_then_apply(
        &handle.store,
        handle.policy,
        format!("delete contact {id}"),
        handle.client.delete_contact(&id),
        |_: &()| Mutation::Remove(id.clone()),
        || handle.client.find_contacts(),
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Contact submission deleted successfully",
            (),
        )),
    ))
}

pub fn contact_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/contacts", get(get_contacts))
        .route("/api/admin/contacts/state", get(get_contact_state))
        .route("/api/admin/contacts/{id}", delete(delete_contact))
        .with_state(app_state)
}
