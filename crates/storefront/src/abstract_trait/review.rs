use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use shared::{
    errors::ServiceError,
    model::{Moderated, Review, ServiceReview},
};
use std::sync::Arc;

pub type DynReviewClient<R> = Arc<dyn ReviewClientTrait<R> + Send + Sync>;

/// A review collection on the moderation queue.
pub trait ReviewResource:
    Moderated + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const API_PATH: &'static str;
    const LABEL: &'static str;
}

impl ReviewResource for Review {
    const API_PATH: &'static str = "reviews";
    const LABEL: &'static str = "review";
}

impl ReviewResource for ServiceReview {
    const API_PATH: &'static str = "service-reviews";
    const LABEL: &'static str = "service review";
}

#[async_trait]
pub trait ReviewClientTrait<R: ReviewResource> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError>;
    async fn approve(&self, id: &str) -> Result<R, ServiceError>;
    async fn reject(&self, id: &str) -> Result<R, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
