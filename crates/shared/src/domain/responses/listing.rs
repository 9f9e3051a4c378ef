use crate::domain::responses::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rendered by the client in place of the grid when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub total_matched: usize,
    pub empty: Option<EmptyState>,
}

impl<T> ListingPage<T> {
    pub fn is_empty(&self) -> bool {
        self.empty.is_some()
    }
}
