use crate::{
    domain::requests::FaqDraft,
    model::{ContentBlock, ContentKind, Identified},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(alias = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

impl Identified for Faq {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ContentBlock for Faq {
    type Draft = FaqDraft;
    const KIND: ContentKind = ContentKind::Faqs;
}
