use crate::{
    model::{Identified, Reference, ResolveAssets},
    utils::resolve_image_url,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    pub category: Reference,
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ResolveAssets for Category {
    fn resolve_assets(mut self, image_url: &str) -> Self {
        self.image = self.image.map(|path| resolve_image_url(image_url, &path));
        self
    }
}

impl ResolveAssets for SubCategory {
    fn resolve_assets(mut self, image_url: &str) -> Self {
        self.image = self.image.map(|path| resolve_image_url(image_url, &path));
        self
    }
}
