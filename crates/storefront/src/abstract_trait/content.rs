use async_trait::async_trait;
use shared::{errors::ServiceError, model::ContentBlock};
use std::sync::Arc;

pub type DynContentClient<T> = Arc<dyn ContentClientTrait<T> + Send + Sync>;

/// Console CRUD over one content-block collection.
#[async_trait]
pub trait ContentClientTrait<T: ContentBlock> {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn create(&self, draft: &T::Draft) -> Result<T, ServiceError>;
    async fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
