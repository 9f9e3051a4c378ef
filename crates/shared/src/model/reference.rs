use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A foreign key as the API returns it: either a bare id or a populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(ReferenceSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(summary) => &summary.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(summary) => summary.name.as_deref(),
        }
    }

    /// True when `key` is this reference's id or (case-insensitively) its slug.
    pub fn matches(&self, key: &str) -> bool {
        if self.id() == key {
            return true;
        }

        match self {
            Reference::Id(_) => false,
            Reference::Populated(summary) => summary
                .slug
                .as_deref()
                .is_some_and(|slug| slug.eq_ignore_ascii_case(key)),
        }
    }
}
