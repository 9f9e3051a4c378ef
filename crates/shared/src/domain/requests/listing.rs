use crate::view::SortKey;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of every storefront listing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    /// Category id or slug.
    pub category: Option<String>,
    /// Sub-category id or slug.
    pub subcategory: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub trending: Option<bool>,
    pub best_seller: Option<bool>,
    pub special_deal: Option<bool>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    /// One-based page number, clamped to the available pages.
    pub page: Option<i64>,
}

impl ListingQuery {
    /// Parameters forwarded to the upstream products endpoint.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(category) = non_blank(&self.category) {
            params.push(("category", category));
        }
        if let Some(subcategory) = non_blank(&self.subcategory) {
            params.push(("subCategory", subcategory));
        }
        if let Some(min) = self.min_price {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("maxPrice", max.to_string()));
        }
        if self.trending == Some(true) {
            params.push(("isTrending", "true".into()));
        }
        if self.best_seller == Some(true) {
            params.push(("isBestSeller", "true".into()));
        }
        if self.special_deal == Some(true) {
            params.push(("isSpecialDeal", "true".into()));
        }
        if let Some(search) = non_blank(&self.search) {
            params.push(("search", search));
        }

        params
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// Trimmed value, or `None` when missing or blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_only_set_criteria() {
        let query = ListingQuery {
            category: Some("shoes".into()),
            trending: Some(false),
            special_deal: Some(true),
            search: Some("   ".into()),
            ..Default::default()
        };

        assert_eq!(
            query.upstream_params(),
            vec![
                ("category", "shoes".to_string()),
                ("isSpecialDeal", "true".to_string())
            ]
        );
    }

    #[test]
    fn blank_taxonomy_filters_are_not_forwarded() {
        let query = ListingQuery {
            category: Some(" ".into()),
            subcategory: Some("  sneakers ".into()),
            ..Default::default()
        };

        assert_eq!(
            query.upstream_params(),
            vec![("subCategory", "sneakers".to_string())]
        );
    }
}
