use crate::{
    abstract_trait::{ReviewClientTrait, ReviewResource},
    service::{ClientTelemetry, HttpApiClient},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{errors::ServiceError, utils::Method};
use std::{marker::PhantomData, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug)]
pub struct ReviewClientService<R> {
    client: HttpApiClient,
    telemetry: ClientTelemetry,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ReviewResource> ReviewClientService<R> {
    pub async fn new(client: HttpApiClient, registry: Arc<Mutex<Registry>>) -> Self {
        let telemetry = ClientTelemetry::new(
            format!("{}-service-client", R::API_PATH),
            &format!("ReviewClientService<{}>", R::LABEL),
            registry,
        )
        .await;

        Self {
            client,
            telemetry,
            _resource: PhantomData,
        }
    }

    async fn moderate(&self, id: &str, action: &'static str) -> Result<R, ServiceError> {
        info!("Moderating {} {id}: {action}", R::LABEL);

        let tracing_ctx = self.telemetry.start_tracing(
            "ModerateReview",
            vec![
                KeyValue::new("component", R::API_PATH),
                KeyValue::new("operation", action),
                KeyValue::new("review.id", id.to_string()),
            ],
        );

        let path = format!("{}/{id}/{action}", R::API_PATH);
        let result = self
            .client
            .put::<(), R>(&tracing_ctx.cx, &path, None)
            .await;

        let review = self
            .telemetry
            .complete(&tracing_ctx, Method::Put, "Moderation confirmed", result)
            .await?;

        Ok(review)
    }
}

#[async_trait]
impl<R: ReviewResource> ReviewClientTrait<R> for ReviewClientService<R> {
    async fn find_all(&self) -> Result<Vec<R>, ServiceError> {
        info!("Retrieving all {} records", R::LABEL);

        let tracing_ctx = self.telemetry.start_tracing(
            "FindAllReviews",
            vec![
                KeyValue::new("component", R::API_PATH),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = self.client.get(&tracing_ctx.cx, R::API_PATH, &[]).await;
        let reviews: Vec<R> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched reviews", result)
            .await?;

        info!("Successfully fetched {} {} records", reviews.len(), R::LABEL);
        Ok(reviews)
    }

    async fn approve(&self, id: &str) -> Result<R, ServiceError> {
        self.moderate(id, "approve").await
    }

    async fn reject(&self, id: &str) -> Result<R, ServiceError> {
        self.moderate(id, "reject").await
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        info!("Deleting {} {id}", R::LABEL);

        let tracing_ctx = self.telemetry.start_tracing(
            "DeleteReview",
            vec![
                KeyValue::new("component", R::API_PATH),
                KeyValue::new("operation", "delete"),
                KeyValue::new("review.id", id.to_string()),
            ],
        );

        let path = format!("{}/{id}", R::API_PATH);
        let result = self.client.delete(&tracing_ctx.cx, &path).await;
        self.telemetry
            .complete(&tracing_ctx, Method::Delete, "Successfully deleted review", result)
            .await?;

        Ok(())
    }
}
