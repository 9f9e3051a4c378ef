mod api;
mod listing;
mod pagination;
mod product;
mod report;

pub use self::api::{ApiEnvelope, ApiResponse, ApiResponsePagination};
pub use self::listing::{EmptyState, ListingPage};
pub use self::pagination::Pagination;
pub use self::product::ProductDetail;
pub use self::report::{CategoryCount, ModerationSummary, ReportOverview};
