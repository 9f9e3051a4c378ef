mod contact;
mod content;
mod listing;
mod review;

pub use self::contact::ContactDraft;
pub use self::content::{
    ClientBrandDraft, CoreValueDraft, FaqDraft, FutureGoalDraft, RoadmapItemDraft,
    SustainabilityDraft, validate_hex_color, validate_icon_name,
};
pub use self::listing::{ListingQuery, PageQuery};
pub(crate) use self::listing::non_blank;
pub use self::review::{ReviewListQuery, ReviewStatusFilter, ServiceReviewDraft};
