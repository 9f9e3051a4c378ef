use crate::{
    abstract_trait::{DynContentClient, DynFeedbackClient, DynReviewClient},
    di::DependenciesInject,
    service::HttpApiClient,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::Config,
    model::{
        Category, ClientBrand, ContactSubmission, CoreValue, Faq, FutureGoal,
        InnovationRoadmapItem, Product, Review, ServiceReview, SustainabilityCommitment,
    },
    store::RefreshPolicy,
    view::{ListingController, RequestState, SharedRequestState},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// A client paired with the request state it feeds.
#[derive(Clone)]
pub struct ResourceHandle<C, T> {
    pub client: C,
    pub store: SharedRequestState<Vec<T>>,
    pub policy: RefreshPolicy,
}

impl<C, T> ResourceHandle<C, T> {
    pub fn new(client: C, policy: RefreshPolicy) -> Self {
        Self {
            client,
            store: RequestState::shared(Vec::new()),
            policy,
        }
    }
}

/// Request-state slices behind the storefront views.
#[derive(Clone)]
pub struct ResourceStores {
    pub products: SharedRequestState<Vec<Product>>,
    pub categories: SharedRequestState<Vec<Category>>,
    pub faqs: SharedRequestState<Vec<Faq>>,
}

impl Default for ResourceStores {
    fn default() -> Self {
        Self {
            products: RequestState::shared(Vec::new()),
            categories: RequestState::shared(Vec::new()),
            faqs: RequestState::shared(Vec::new()),
        }
    }
}

/// Console collections, each with the policy applied once the server confirms
/// a mutation.
#[derive(Clone)]
pub struct ConsoleResources {
    pub core_values: ResourceHandle<DynContentClient<CoreValue>, CoreValue>,
    pub future_goals: ResourceHandle<DynContentClient<FutureGoal>, FutureGoal>,
    pub innovation_roadmap:
        ResourceHandle<DynContentClient<InnovationRoadmapItem>, InnovationRoadmapItem>,
    pub sustainability:
        ResourceHandle<DynContentClient<SustainabilityCommitment>, SustainabilityCommitment>,
    pub client_brands: ResourceHandle<DynContentClient<ClientBrand>, ClientBrand>,
    pub faqs: ResourceHandle<DynContentClient<Faq>, Faq>,
    pub reviews: ResourceHandle<DynReviewClient<Review>, Review>,
    pub service_reviews: ResourceHandle<DynReviewClient<ServiceReview>, ServiceReview>,
    pub contacts: ResourceHandle<DynFeedbackClient, ContactSubmission>,
}

impl ConsoleResources {
    pub fn new(di: &DependenciesInject) -> Self {
        use RefreshPolicy::{ApplyConfirmed, Refetch};

        Self {
            core_values: ResourceHandle::new(di.core_value_clients.clone(), ApplyConfirmed),
            future_goals: ResourceHandle::new(di.future_goal_clients.clone(), ApplyConfirmed),
            innovation_roadmap: ResourceHandle::new(di.roadmap_clients.clone(), ApplyConfirmed),
            sustainability: ResourceHandle::new(
                di.sustainability_clients.clone(),
                ApplyConfirmed,
            ),
            client_brands: ResourceHandle::new(di.client_brand_clients.clone(), ApplyConfirmed),
            faqs: ResourceHandle::new(di.faq_clients.clone(), ApplyConfirmed),
            reviews: ResourceHandle::new(di.review_clients.clone(), Refetch),
            service_reviews: ResourceHandle::new(di.service_review_clients.clone(), Refetch),
            contacts: ResourceHandle::new(di.feedback_clients.clone(), ApplyConfirmed),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub listings: ListingController,
    pub stores: ResourceStores,
    pub console: ConsoleResources,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));

        info!("Connecting to commerce API at {}", config.api.base_url);
        let client =
            HttpApiClient::new(&config.api).context("Failed to build the commerce API client")?;

        let di_container = DependenciesInject::new(client, registry.clone()).await;

        Ok(Self::from_parts(di_container, config.page_size, registry))
    }

    pub fn from_parts(
        di_container: DependenciesInject,
        page_size: usize,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let console = ConsoleResources::new(&di_container);

        Self {
            di_container,
            listings: ListingController::new(page_size),
            stores: ResourceStores::default(),
            console,
            registry,
        }
    }
}


