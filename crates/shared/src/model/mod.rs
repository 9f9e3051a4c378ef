mod category;
mod contact;
mod content;
mod faq;
mod product;
mod reference;
mod review;

pub use self::category::{Category, SubCategory};
pub use self::contact::ContactSubmission;
pub use self::content::{
    ClientBrand, ContentBlock, ContentKind, CoreValue, FutureGoal, InnovationRoadmapItem,
    RoadmapStatus, SustainabilityCommitment,
};
pub use self::faq::Faq;
pub use self::product::{Product, ProductFlag};
pub use self::reference::{Reference, ReferenceSummary};
pub use self::review::{Moderated, Review, ServiceReview};

/// Records addressed by the API through a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Records carrying asset paths relative to the image host.
pub trait ResolveAssets {
    fn resolve_assets(self, image_url: &str) -> Self;
}
