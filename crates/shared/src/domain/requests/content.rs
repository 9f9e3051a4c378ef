use crate::{icons::Icon, model::RoadmapStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// `#rgb` or `#rrggbb`.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| ValidationError::new("hex_color"))?;

    if (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color").with_message("Color must be a hex value".into()))
    }
}

pub fn validate_icon_name(name: &str) -> Result<(), ValidationError> {
    match Icon::from_name(name) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("icon").with_message("Unknown icon".into())),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoreValueDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Craftsmanship")]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "validate_icon_name"))]
    #[schema(example = "Heart")]
    pub icon: String,

    #[validate(custom(function = "validate_hex_color"))]
    #[schema(example = "#e11d48")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FutureGoalDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "validate_icon_name"))]
    pub icon: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    #[validate(range(min = 2000, max = 2100, message = "Target year is out of range"))]
    pub target_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItemDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Phase is required"))]
    #[schema(example = "Phase 2")]
    pub phase: String,

    #[serde(default)]
    #[schema(example = "Q3 2025")]
    pub timeline: String,

    #[serde(default)]
    pub status: RoadmapStatus,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "validate_icon_name"))]
    pub icon: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    #[validate(range(max = 100, message = "Progress is a percentage"))]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientBrandDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Logo is required"))]
    pub logo: String,

    #[validate(url(message = "Website must be a URL"))]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqDraft {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,

    pub category: Option<String>,

    pub order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_value(icon: &str, color: &str) -> CoreValueDraft {
        CoreValueDraft {
            title: "Care".into(),
            description: "We care".into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    #[test]
    fn hex_colors() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#A1b2C3").is_ok());
        assert!(validate_hex_color("fff").is_err());
        assert!(validate_hex_color("#ggg").is_err());
        assert!(validate_hex_color("#12345").is_err());
    }

    #[test]
    fn draft_with_known_icon_and_color_passes() {
        assert!(core_value("Heart", "#e11d48").validate().is_ok());
    }

    #[test]
    fn draft_reports_each_invalid_field() {
        let errors = core_value("Unicorn", "red").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("icon"));
        assert!(fields.contains_key("color"));
    }

    #[test]
    fn missing_title_blocks_submission() {
        let mut draft = core_value("Leaf", "#00ff00");
        draft.title.clear();
        assert!(draft.validate().is_err());
    }
}
