use crate::{
    abstract_trait::ContentClientTrait,
    service::{ClientTelemetry, HttpApiClient},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{errors::ServiceError, model::ContentBlock, utils::Method};
use std::{marker::PhantomData, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

/// CRUD client for one content-block collection, addressed by `T::KIND`.
#[derive(Debug)]
pub struct ContentClientService<T> {
    client: HttpApiClient,
    telemetry: ClientTelemetry,
    _kind: PhantomData<fn() -> T>,
}

impl<T: ContentBlock> ContentClientService<T> {
    pub async fn new(client: HttpApiClient, registry: Arc<Mutex<Registry>>) -> Self {
        let kind = T::KIND;
        let telemetry = ClientTelemetry::new(
            format!("{kind}-service-client"),
            &format!("ContentClientService<{kind}>"),
            registry,
        )
        .await;

        Self {
            client,
            telemetry,
            _kind: PhantomData,
        }
    }

    fn collection(&self) -> &'static str {
        T::KIND.api_path()
    }

    fn attributes(&self, operation: &'static str) -> Vec<KeyValue> {
        vec![
            KeyValue::new("component", T::KIND.to_string()),
            KeyValue::new("operation", operation),
        ]
    }
}

#[async_trait]
impl<T: ContentBlock> ContentClientTrait<T> for ContentClientService<T> {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        info!("Retrieving all {} records", T::KIND.label());

        let tracing_ctx = self
            .telemetry
            .start_tracing("FindAllContent", self.attributes("find_all"));

        let result = self.client.get(&tracing_ctx.cx, self.collection(), &[]).await;
        let items: Vec<T> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched records", result)
            .await?;

        Ok(items
            .into_iter()
            .map(|item| item.resolve_assets(self.client.image_url()))
            .collect())
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, ServiceError> {
        info!("Creating new {}", T::KIND.label());

        let tracing_ctx = self
            .telemetry
            .start_tracing("CreateContent", self.attributes("create"));

        let result = self
            .client
            .post(&tracing_ctx.cx, self.collection(), draft)
            .await;
        let created: T = self
            .telemetry
            .complete(&tracing_ctx, Method::Post, "Successfully created record", result)
            .await?;

        info!("{} {} created", T::KIND.label(), created.id());
        Ok(created.resolve_assets(self.client.image_url()))
    }

    async fn update(&self, id: &str, draft: &T::Draft) -> Result<T, ServiceError> {
        info!("Updating {} {id}", T::KIND.label());

        let mut attributes = self.attributes("update");
        attributes.push(KeyValue::new("record.id", id.to_string()));
        let tracing_ctx = self.telemetry.start_tracing("UpdateContent", attributes);

        let path = format!("{}/{id}", self.collection());
        let result = self.client.put(&tracing_ctx.cx, &path, Some(draft)).await;
        let updated: T = self
            .telemetry
            .complete(&tracing_ctx, Method::Put, "Successfully updated record", result)
            .await?;

        Ok(updated.resolve_assets(self.client.image_url()))
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        info!("Deleting {} {id}", T::KIND.label());

        let mut attributes = self.attributes("delete");
        attributes.push(KeyValue::new("record.id", id.to_string()));
        let tracing_ctx = self.telemetry.start_tracing("DeleteContent", attributes);

        let path = format!("{}/{id}", self.collection());
        let result = self.client.delete(&tracing_ctx.cx, &path).await;
        self.telemetry
            .complete(&tracing_ctx, Method::Delete, "Successfully deleted record", result)
            .await?;

        Ok(())
    }
}
