pub(crate) mod contact;
mod content;
mod docs;
pub(crate) mod report;
mod review;

use axum::Router;
use shared::{
    errors::{HttpError, ServiceError},
    model::Identified,
    store::{Mutation, RefreshPolicy},
    view::{SharedRequestState, track_request},
};
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

pub use self::contact::contact_routes;
pub use self::docs::console_openapi;
pub use self::report::report_routes;

pub const REVIEWS_PATH: &str = "/api/admin/reviews";
pub const SERVICE_REVIEWS_PATH: &str = "/api/admin/service-reviews";

/// Console routes built per resource type; they are mounted next to the
/// documented router rather than through it.
pub fn console_routes(app_state: Arc<AppState>) -> Router {
    let console = &app_state.console;

    Router::new()
        .merge(content::content_routes(
            console.core_values.clone(),
            app_state.listings,
        ))
        .merge(content::content_routes(
            console.future_goals.clone(),
            app_state.listings,
        ))
        .merge(content::content_routes(
            console.innovation_roadmap.clone(),
            app_state.listings,
        ))
        .merge(content::content_routes(
            console.sustainability.clone(),
            app_state.listings,
        ))
        .merge(content::content_routes(
            console.client_brands.clone(),
            app_state.listings,
        ))
        .merge(content::content_routes(
            console.faqs.clone(),
            app_state.listings,
        ))
        .merge(review::review_routes(
            REVIEWS_PATH,
            console.reviews.clone(),
            app_state.listings,
        ))
        .merge(review::review_routes(
            SERVICE_REVIEWS_PATH,
            console.service_reviews.clone(),
            app_state.listings,
        ))
}

/// Sends a console mutation and touches local data only once the server
/// confirmed it.
///
/// `ApplyConfirmed` folds the returned record into the list; `Refetch` loads
/// the whole list again. A rejected mutation restores the staged snapshot and
/// the server's message goes back to the caller unchanged.
pub(crate) async fn confirm_then_apply<T, R, Req, Ref, RefFut>(
    store: &SharedRequestState<Vec<T>>,
    policy: RefreshPolicy,
    description: String,
    request: Req,
    confirmed: impl FnOnce(&R) -> Mutation<T>,
    refetch: Ref,
) -> Result<R, HttpError>
where
    T: Identified + Clone + Send + 'static,
    Req: Future<Output = Result<R, ServiceError>>,
    Ref: FnOnce() -> RefFut,
    RefFut: Future<Output = Result<Vec<T>, ServiceError>>,
{
    let staged = store.lock().await.stage(description);

    let outcome = match request.await {
        Ok(outcome) => outcome,
        Err(err) => {
            store.lock().await.abort(staged, &err);
            return Err(err.into());
        }
    };

    match policy {
        RefreshPolicy::ApplyConfirmed => {
            store.lock().await.commit(staged, confirmed(&outcome));
        }
        RefreshPolicy::Refetch => {
            drop(staged);
            if let Err(err) = track_request(store, refetch()).await {
                warn!("Mutation confirmed but refreshing the list failed: {err}");
            }
        }
    }

    Ok(outcome)
}
