use async_trait::async_trait;
use shared::{
    domain::requests::{ContactDraft, ServiceReviewDraft},
    errors::ServiceError,
    model::{ContactSubmission, ServiceReview},
};
use std::sync::Arc;

pub type DynFeedbackClient = Arc<dyn FeedbackClientTrait + Send + Sync>;

/// What visitors send in, and the console's view of contact messages.
#[async_trait]
pub trait FeedbackClientTrait {
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<ContactSubmission, ServiceError>;
    async fn submit_service_review(
        &self,
        draft: &ServiceReviewDraft,
    ) -> Result<ServiceReview, ServiceError>;
    async fn find_contacts(&self) -> Result<Vec<ContactSubmission>, ServiceError>;
    async fn delete_contact(&self, id: &str) -> Result<(), ServiceError>;
}
