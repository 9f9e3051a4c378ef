use crate::view::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<PageWindow> for Pagination {
    fn from(window: PageWindow) -> Self {
        Self {
            page: window.page,
            page_size: window.page_size,
            total_items: window.total,
            total_pages: window.total_pages,
            has_previous: window.has_previous(),
            has_next: window.has_next(),
        }
    }
}
