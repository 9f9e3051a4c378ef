//! Client-side list view controller: a request-state container per resource,
//! a pure filter/sort reducer and the pagination cursor that windows its output.

mod controller;
mod filter;
mod pagination;
mod request_state;
mod sort;

pub use self::controller::{ListingController, ListingPreset, paginate};
pub use self::filter::{FilterSet, ProductPredicate};
pub use self::pagination::{DEFAULT_PAGE_SIZE, PageCursor, PageWindow};
pub use self::request_state::{
    Phase, RequestSnapshot, RequestState, RequestTicket, Settlement, SharedRequestState, track_request,
};
pub use self::sort::{SortKey, sort_products};
