use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Newest => match (a.created_at, b.created_at) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::PriceLow => a.effective_price().total_cmp(&b.effective_price()),
            SortKey::PriceHigh => b.effective_price().total_cmp(&a.effective_price()),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// Stable: products comparing equal keep their input order.
pub fn sort_products(mut products: Vec<Product>, key: SortKey) -> Vec<Product> {
    products.sort_by(|a, b| key.compare(a, b));
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reference;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn product(id: &str, price: f64, rating: f64, day: Option<u32>) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            discount_price: None,
            category: Reference::Id("c".into()),
            sub_category: None,
            images: vec![],
            rating,
            tags: vec![],
            is_trending: false,
            is_best_seller: false,
            is_special_deal: false,
            created_at: day.and_then(|d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).single()),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(SortKey::from_str("price-low").unwrap(), SortKey::PriceLow);
        assert_eq!(
            serde_json::from_str::<SortKey>(r#""price-high""#).unwrap(),
            SortKey::PriceHigh
        );
        assert!(serde_json::from_str::<SortKey>(r#""cheapest""#).is_err());
    }

    #[test]
    fn newest_first_with_undated_last() {
        let items = vec![
            product("old", 1.0, 0.0, Some(1)),
            product("undated", 1.0, 0.0, None),
            product("new", 1.0, 0.0, Some(20)),
        ];
        assert_eq!(
            ids(&sort_products(items, SortKey::Newest)),
            vec!["new", "old", "undated"]
        );
    }

    #[test]
    fn price_orders_use_effective_price() {
        let mut discounted = product("discounted", 100.0, 0.0, None);
        discounted.discount_price = Some(5.0);
        let items = vec![
            product("mid", 20.0, 0.0, None),
            discounted,
            product("high", 50.0, 0.0, None),
        ];

        assert_eq!(
            ids(&sort_products(items.clone(), SortKey::PriceLow)),
            vec!["discounted", "mid", "high"]
        );
        assert_eq!(
            ids(&sort_products(items, SortKey::PriceHigh)),
            vec!["high", "mid", "discounted"]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            product("a", 10.0, 4.0, None),
            product("b", 10.0, 5.0, None),
            product("c", 10.0, 4.0, None),
        ];
        assert_eq!(ids(&sort_products(items.clone(), SortKey::Rating)), vec!["b", "a", "c"]);
        assert_eq!(ids(&sort_products(items, SortKey::PriceLow)), vec!["a", "b", "c"]);
    }
}
