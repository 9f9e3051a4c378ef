pub mod catalog;
pub mod content;
pub mod feedback;
pub mod review;

pub use self::catalog::{CatalogClientTrait, DynCatalogClient};
pub use self::content::{ContentClientTrait, DynContentClient};
pub use self::feedback::{DynFeedbackClient, FeedbackClientTrait};
pub use self::review::{DynReviewClient, ReviewClientTrait, ReviewResource};
