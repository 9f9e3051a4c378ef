use crate::{
    abstract_trait::CatalogClientTrait,
    service::{ClientTelemetry, HttpApiClient},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    domain::requests::ListingQuery,
    errors::ServiceError,
    model::{Category, Faq, Product, ResolveAssets, Review, SubCategory},
    utils::Method,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Read side of the storefront: products, taxonomy, FAQs and product reviews.
#[derive(Debug, Clone)]
pub struct CatalogClientService {
    client: HttpApiClient,
    telemetry: ClientTelemetry,
}

impl CatalogClientService {
    pub async fn new(client: HttpApiClient, registry: Arc<Mutex<Registry>>) -> Self {
        let telemetry =
            ClientTelemetry::new("catalog-service-client", "CatalogClientService", registry).await;

        Self { client, telemetry }
    }

    fn resolve_all<T: ResolveAssets>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .map(|item| item.resolve_assets(self.client.image_url()))
            .collect()
    }
}

#[async_trait]
impl CatalogClientTrait for CatalogClientService {
    async fn find_products(&self, query: &ListingQuery) -> Result<Vec<Product>, ServiceError> {
        let params = query.upstream_params();
        info!("Retrieving products ({} upstream filters)", params.len());

        let tracing_ctx = self.telemetry.start_tracing(
            "FindProducts",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_products"),
                KeyValue::new("filters", params.len() as i64),
            ],
        );

        let result = self.client.get(&tracing_ctx.cx, "products", &params).await;
        let products: Vec<Product> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched products", result)
            .await?;

        info!("Successfully fetched {} products", products.len());
        Ok(self.resolve_all(products))
    }

    async fn find_product(&self, id: &str) -> Result<Product, ServiceError> {
        info!("Fetching product by id: {id}");

        let tracing_ctx = self.telemetry.start_tracing(
            "FindProductById",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = self
            .client
            .get(&tracing_ctx.cx, &format!("products/{id}"), &[])
            .await;
        let product: Product = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched product", result)
            .await?;

        Ok(product.resolve_assets(self.client.image_url()))
    }

    async fn find_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindProductReviews",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_product_reviews"),
                KeyValue::new("product.id", product_id.to_string()),
            ],
        );

        let result = self
            .client
            .get(&tracing_ctx.cx, &format!("reviews/product/{product_id}"), &[])
            .await;

        let reviews: Vec<Review> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched reviews", result)
            .await?;

        Ok(reviews)
    }

    async fn find_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindCategories",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_categories"),
            ],
        );

        let result = self.client.get(&tracing_ctx.cx, "categories", &[]).await;
        let categories: Vec<Category> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched categories", result)
            .await?;

        Ok(self.resolve_all(categories))
    }

    async fn find_subcategories(
        &self,
        category_id: &str,
    ) -> Result<Vec<SubCategory>, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindSubCategories",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_subcategories"),
                KeyValue::new("category.id", category_id.to_string()),
            ],
        );

        let result = self
            .client
            .get(
                &tracing_ctx.cx,
                &format!("categories/{category_id}/subcategories"),
                &[],
            )
            .await;
        let subcategories: Vec<SubCategory> = self
            .telemetry
            .complete(
                &tracing_ctx,
                Method::Get,
                "Successfully fetched sub-categories",
                result,
            )
            .await?;

        Ok(self.resolve_all(subcategories))
    }

    async fn find_faqs(&self) -> Result<Vec<Faq>, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindFaqs",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_faqs"),
            ],
        );

        let result = self.client.get(&tracing_ctx.cx, "faqs", &[]).await;
        let mut faqs: Vec<Faq> = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched FAQs", result)
            .await?;

        faqs.sort_by_key(|faq| faq.order.unwrap_or(i32::MAX));
        Ok(faqs)
    }

    async fn find_faq(&self, id: &str) -> Result<Faq, ServiceError> {
        let tracing_ctx = self.telemetry.start_tracing(
            "FindFaqById",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_faq"),
                KeyValue::new("faq.id", id.to_string()),
            ],
        );

        let result = self
            .client
            .get(&tracing_ctx.cx, &format!("faqs/{id}"), &[])
            .await;

        let faq: Faq = self
            .telemetry
            .complete(&tracing_ctx, Method::Get, "Successfully fetched FAQ", result)
            .await?;

        Ok(faq)
    }
}
