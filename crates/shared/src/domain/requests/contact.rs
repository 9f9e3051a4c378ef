use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "Phone number is invalid"))]
    pub phone: Option<String>,

    #[serde(default)]
    pub subject: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}
