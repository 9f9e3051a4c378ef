use crate::{
    model::{Identified, Reference, ResolveAssets},
    utils::resolve_image_url,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    pub category: Reference,
    #[serde(default)]
    pub sub_category: Option<Reference>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_special_deal: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ProductFlag {
    Trending,
    BestSeller,
    SpecialDeal,
}

impl Product {
    /// Price the customer pays: the discount price when it actually undercuts `price`.
    pub fn effective_price(&self) -> f64 {
        match self.discount_price {
            Some(discount) if discount > 0.0 && discount < self.price => discount,
            _ => self.price,
        }
    }

    pub fn has_flag(&self, flag: ProductFlag) -> bool {
        match flag {
            ProductFlag::Trending => self.is_trending,
            ProductFlag::BestSeller => self.is_best_seller,
            ProductFlag::SpecialDeal => self.is_special_deal,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ResolveAssets for Product {
    fn resolve_assets(mut self, image_url: &str) -> Self {
        self.images = self
            .images
            .iter()
            .map(|path| resolve_image_url(image_url, path))
            .collect();
        self
    }
}
