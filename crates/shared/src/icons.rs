//! Closed table of the icon identifiers content blocks may reference.
//!
//! Content records store icon names as free text (`"Leaf"`, `"trending-up"`).
//! Lookups go through [`Icon::from_name`], so an unknown name can be rejected at
//! validation time or replaced with [`Icon::FALLBACK`] at render time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    Circle,
    Droplet,
    Gem,
    Globe,
    HandHeart,
    Heart,
    HelpCircle,
    Leaf,
    Lightbulb,
    Package,
    Recycle,
    Rocket,
    Shield,
    ShoppingBag,
    Smile,
    Sparkles,
    Star,
    Sun,
    Target,
    TreePine,
    TrendingUp,
    Truck,
    Users,
    Wind,
    Zap,
}

impl Icon {
    pub const FALLBACK: Icon = Icon::HelpCircle;

    /// Accepts `PascalCase`, `kebab-case`, `snake_case` and spaced names.
    pub fn from_name(name: &str) -> Option<Icon> {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return None;
        }
        Icon::from_str(&normalized).ok()
    }

    pub fn from_name_or_fallback(name: &str) -> Icon {
        Icon::from_name(name).unwrap_or(Icon::FALLBACK)
    }

    pub fn all() -> Vec<Icon> {
        Icon::iter().collect()
    }
}

fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() && prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        } else {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower_or_digit = false;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}
