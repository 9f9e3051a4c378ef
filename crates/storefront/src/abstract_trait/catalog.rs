use async_trait::async_trait;
use shared::{
    domain::requests::ListingQuery,
    errors::ServiceError,
    model::{Category, Faq, Product, Review, SubCategory},
};
use std::sync::Arc;

pub type DynCatalogClient = Arc<dyn CatalogClientTrait + Send + Sync>;

#[async_trait]
pub trait CatalogClientTrait {
    async fn find_products(&self, query: &ListingQuery) -> Result<Vec<Product>, ServiceError>;
    async fn find_product(&self, id: &str) -> Result<Product, ServiceError>;
    async fn find_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, ServiceError>;
    async fn find_categories(&self) -> Result<Vec<Category>, ServiceError>;
    async fn find_subcategories(&self, category_id: &str)
    -> Result<Vec<SubCategory>, ServiceError>;
    async fn find_faqs(&self) -> Result<Vec<Faq>, ServiceError>;
    async fn find_faq(&self, id: &str) -> Result<Faq, ServiceError>;
}
