use crate::{
    domain::requests::{
        ClientBrandDraft, CoreValueDraft, FutureGoalDraft, RoadmapItemDraft, SustainabilityDraft,
    },
    icons::Icon,
    model::Identified,
    utils::resolve_image_url,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// The marketing records the superadmin console manages, one API collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentKind {
    CoreValues,
    FutureGoals,
    InnovationRoadmap,
    Sustainability,
    ClientBrands,
    Faqs,
}

impl ContentKind {
    pub fn all() -> Vec<ContentKind> {
        ContentKind::iter().collect()
    }

    /// Collection path on the upstream API.
    pub fn api_path(self) -> &'static str {
        match self {
            ContentKind::CoreValues => "core-values",
            ContentKind::FutureGoals => "future-goals",
            ContentKind::InnovationRoadmap => "innovation-roadmap",
            ContentKind::Sustainability => "sustainability-commitments",
            ContentKind::ClientBrands => "client-brands",
            ContentKind::Faqs => "faqs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::CoreValues => "core value",
            ContentKind::FutureGoals => "future goal",
            ContentKind::InnovationRoadmap => "roadmap item",
            ContentKind::Sustainability => "sustainability commitment",
            ContentKind::ClientBrands => "client brand",
            ContentKind::Faqs => "faq",
        }
    }
}

/// A record with an independent create/update/delete lifecycle in the console.
pub trait ContentBlock:
    Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    const KIND: ContentKind;

    fn resolve_assets(self, _image_url: &str) -> Self {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoreValue {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FutureGoal {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub target_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InnovationRoadmapItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub status: RoadmapStatus,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityCommitment {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientBrand {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl CoreValue {
    pub fn icon(&self) -> Icon {
        Icon::from_name_or_fallback(&self.icon)
    }
}

impl FutureGoal {
    pub fn icon(&self) -> Icon {
        Icon::from_name_or_fallback(&self.icon)
    }
}

impl SustainabilityCommitment {
    pub fn icon(&self) -> Icon {
        Icon::from_name_or_fallback(&self.icon)
    }
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

identified!(
    CoreValue,
    FutureGoal,
    InnovationRoadmapItem,
    SustainabilityCommitment,
    ClientBrand,
);

impl ContentBlock for CoreValue {
    type Draft = CoreValueDraft;
    const KIND: ContentKind = ContentKind::CoreValues;
}

impl ContentBlock for FutureGoal {
    type Draft = FutureGoalDraft;
    const KIND: ContentKind = ContentKind::FutureGoals;
}

impl ContentBlock for InnovationRoadmapItem {
    type Draft = RoadmapItemDraft;
    const KIND: ContentKind = ContentKind::InnovationRoadmap;
}

impl ContentBlock for SustainabilityCommitment {
    type Draft = SustainabilityDraft;
    const KIND: ContentKind = ContentKind::Sustainability;
}

impl ContentBlock for ClientBrand {
    type Draft = ClientBrandDraft;
    const KIND: ContentKind = ContentKind::ClientBrands;

    fn resolve_assets(mut self, image_url: &str) -> Self {
        if !self.logo.is_empty() {
            self.logo = resolve_image_url(image_url, &self.logo);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kinds_round_trip_through_route_segment() {
        for kind in ContentKind::iter() {
            let segment = kind.to_string();
            assert_eq!(ContentKind::from_str(&segment).unwrap(), kind);
        }
        assert_eq!(ContentKind::InnovationRoadmap.to_string(), "innovation-roadmap");
    }

    #[test]
    fn unknown_icon_name_falls_back() {
        let value = CoreValue {
            id: "v1".into(),
            title: "Care".into(),
            description: String::new(),
            icon: "NotAnIcon".into(),
            color: "#112233".into(),
        };
        assert_eq!(value.icon(), Icon::FALLBACK);
    }

    #[test]
    fn brand_logo_is_resolved_against_image_host() {
        let brand = ClientBrand {
            id: "b1".into(),
            name: "Acme".into(),
            logo: "/logos/acme.svg".into(),
            website: None,
        }
        .resolve_assets("https://img.test");

        assert_eq!(brand.logo, "https://img.test/logos/acme.svg");
    }

    #[test]
    fn roadmap_status_uses_kebab_case() {
        let item: InnovationRoadmapItem = serde_json::from_str(
            r#"{"_id":"r1","title":"AR try-on","status":"in-progress"}"#,
        )
        .unwrap();
        assert_eq!(item.status, RoadmapStatus::InProgress);
    }
}
