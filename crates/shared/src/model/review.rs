use crate::model::{Identified, Reference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review of a single product, written by a signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub report_count: u32,
    #[serde(default)]
    pub user: Option<Reference>,
    #[serde(default)]
    pub product: Option<Reference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Review of the shop's service as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReview {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub report_count: u32,
    #[serde(default)]
    pub user: Option<Reference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Shared view of anything that passes through the moderation queue.
pub trait Moderated: Identified {
    fn rating(&self) -> u8;
    fn is_approved(&self) -> bool;
    fn report_count(&self) -> u32;

    fn is_reported(&self) -> bool {
        self.report_count() > 0
    }
}

impl Identified for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ServiceReview {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Moderated for Review {
    fn rating(&self) -> u8 {
        self.rating
    }

    fn is_approved(&self) -> bool {
        self.is_approved
    }

    fn report_count(&self) -> u32 {
        self.report_count
    }
}

impl Moderated for ServiceReview {
    fn rating(&self) -> u8 {
        self.rating
    }

    fn is_approved(&self) -> bool {
        self.is_approved
    }

    fn report_count(&self) -> u32 {
        self.report_count
    }
}
