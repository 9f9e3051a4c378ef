use crate::{
    abstract_trait::FeedbackClientTrait,
    service::{ClientTelemetry, HttpApiClient},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::requests::{ContactDraft, ServiceReviewDraft},
    errors::ServiceError,
    model::{ContactSubmission, ServiceReview},
    utils::Method,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone)]
pub struct FeedbackClientService {
    client: HttpApiClient,
    telemetry: ClientTelemetry,
}

impl FeedbackClientService {
    pub async fn new(client: HttpApiClient, registry: Arc<Mutex<Registry>>) -> Self {
        let telemetry =
            ClientTelemetry::new("feedback-service-client", "FeedbackClientService", registry)
                .await;

        Self { client, telemetry }
    }
}

#[async_trait]
impl FeedbackClientTrait for FeedbackClientService {
    async fn submit_contact(&self, draft: &ContactDraft) -> Result<ContactSubmission, ServiceError> {
        info!("Submitting contact message: {}", draft.subject);

        let tracing_ctx = self.telemetry.start_tracing(
            "SubmitContact",
            vec![
                KeyValue::new("component", "contact"),
                KeyValue::new("operation", "submit"),
            ],
        );

        let result = self.client.post(&tracing_ctx.cx, "contacts", draft).await;
        let submission: ContactSubmission = self
            .telemetry
            .complete(&tracing_ctx, Method::Post, "Contact message accepted", result)
            .await?;

        Ok(submission)
    }

    async fn submit_service_review(
        &self,
        draft: &ServiceReviewDraft,
    ) -> Result<ServiceReview, ServiceError> {
        info!("Submitting service review from {}", draft.name);

        let tracing_ctx = self.telemetry.start_tracing(
            "SubmitServiceReview",
            vec![
                KeyValue::new("component", "service-review"),
                KeyValue::new("operation", "submit"),
                KeyValue::new("review.rating", i64::from(draft.rating)),
            ],
        );

        let result = self
            .client
            .post(&tracing_ctx.cx, "service-reviews", draft)
            .await;
        let review: ServiceReview = self
            .telemetry
            .complete(&tracing_ctx, Method::Post, "Service review accepted", result)
            .await?;

        Ok(review)
    }

    async fn find_contacts(&self) -> Result<Vec<ContactSubmission>, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindContacts",
            vec![
                KeyValue::new("component", "contact"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = self.client.get(&tracing_ctx.cx, "contacts", &[]).await;
        let contacts: Vec<ContactSubmission> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched contacts", result)
            .await?;

        info!("Successfully fetched {} contact submissions", contacts.len());
        Ok(contacts)
    }

    async fn delete_contact(&self, id: &str) -> Result<(), ServiceError> {
        info!("Deleting contact submission {id}");

        let tracing_ctx = self.telemetry.start_tracing(
            "DeleteContact",
            vec![
                KeyValue::new("component", "contact"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("contact.id", id.to_string()),
            ],
        );

        let result = self
            .client
            .delete(&tracing_ctx.cx, &format!("contacts/{id}"))
            .await;
        self.telemetry
            .complete(&tracing_ctx, Method::Delete, "Contact submission deleted", result)
            .await?;

        Ok(())
    }
}
