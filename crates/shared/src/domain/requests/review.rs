use crate::model::Moderated;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReviewDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,

    #[validate(length(min = 1, message = "Review text is required"))]
    pub text: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReviewStatusFilter {
    Pending,
    Approved,
    Reported,
}

impl ReviewStatusFilter {
    pub fn matches<R: Moderated>(self, review: &R) -> bool {
        match self {
            ReviewStatusFilter::Pending => !review.is_approved(),
            ReviewStatusFilter::Approved => review.is_approved(),
            ReviewStatusFilter::Reported => review.is_reported(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    pub status: Option<ReviewStatusFilter>,
    pub page: Option<i64>,
}
