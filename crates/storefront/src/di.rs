use prometheus_client::registry::Registry;
use shared::model::{
    ClientBrand, CoreValue, Faq, FutureGoal, InnovationRoadmapItem, Review, ServiceReview,
    SustainabilityCommitment,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::{DynCatalogClient, DynContentClient, DynFeedbackClient, DynReviewClient},
    service::{
        CatalogClientService, ContentClientService, FeedbackClientService, HttpApiClient,
        ReviewClientService,
    },
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub catalog_clients: DynCatalogClient,
    pub feedback_clients: DynFeedbackClient,
    pub review_clients: DynReviewClient<Review>,
    pub service_review_clients: DynReviewClient<ServiceReview>,
    pub core_value_clients: DynContentClient<CoreValue>,
    pub future_goal_clients: DynContentClient<FutureGoal>,
    pub roadmap_clients: DynContentClient<InnovationRoadmapItem>,
    pub sustainability_clients: DynContentClient<SustainabilityCommitment>,
    pub client_brand_clients: DynContentClient<ClientBrand>,
    pub faq_clients: DynContentClient<Faq>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("catalog_service", &"DynCatalogClient")
            .field("feedback_service", &"DynFeedbackClient")
            .field("review_service", &"DynReviewClient<Review>")
            .field("service_review_service", &"DynReviewClient<ServiceReview>")
            .field("content_services", &"DynContentClient<_> x6")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(client: HttpApiClient, registry: Arc<Mutex<Registry>>) -> Self {
        let catalog_clients: DynCatalogClient =
            Arc::new(CatalogClientService::new(client.clone(), registry.clone()).await);

        let feedback_clients: DynFeedbackClient =
            Arc::new(FeedbackClientService::new(client.clone(), registry.clone()).await);

        let review_clients: DynReviewClient<Review> =
            Arc::new(ReviewClientService::new(client.clone(), registry.clone()).await);

        let service_review_clients: DynReviewClient<ServiceReview> =
            Arc::new(ReviewClientService::new(client.clone(), registry.clone()).await);

        let core_value_clients: DynContentClient<CoreValue> =
            Arc::new(ContentClientService::new(client.clone(), registry.clone()).await);

        let future_goal_clients: DynContentClient<FutureGoal> =
            Arc::new(ContentClientService::new(client.clone(), registry.clone()).await);

        let roadmap_clients: DynContentClient<InnovationRoadmapItem> =
            Arc::new(ContentClientService::new(client.clone(), registry.clone()).await);

        let sustainability_clients: DynContentClient<SustainabilityCommitment> =
            Arc::new(ContentClientService::new(client.clone(), registry.clone()).await);

        let client_brand_clients: DynContentClient<ClientBrand> =
            Arc::new(ContentClientService::new(client.clone(), registry.clone()).await);

        let faq_clients: DynContentClient<Faq> =
            Arc::new(ContentClientService::new(client, registry).await);

        Self {
            catalog_clients,
            feedback_clients,
            review_clients,
            service_review_clients,
            core_value_clients,
            future_goal_clients,
            roadmap_clients,
            sustainability_clients,
            client_brand_clients,
            faq_clients,
        }
    }
}
