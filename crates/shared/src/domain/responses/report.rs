use crate::model::{Moderated, Product};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub products: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModerationSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub reported: usize,
    pub average_rating: Option<f64>,
}

/// Figures for the superadmin reports dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportOverview {
    pub total_products: usize,
    pub trending: usize,
    pub best_sellers: usize,
    pub special_deals: usize,
    pub discounted: usize,
    pub average_price: Option<f64>,
    pub by_category: Vec<CategoryCount>,
    pub product_reviews: ModerationSummary,
    pub service_reviews: ModerationSummary,
}

impl ModerationSummary {
    pub fn from_reviews<R: Moderated>(reviews: &[R]) -> Self {
        let total = reviews.len();
        let approved = reviews.iter().filter(|r| r.is_approved()).count();
        let reported = reviews.iter().filter(|r| r.is_reported()).count();
        let average_rating = (total > 0).then(|| {
            reviews.iter().map(|r| f64::from(r.rating())).sum::<f64>() / total as f64
        });

        Self {
            total,
            approved,
            pending: total - approved,
            reported,
            average_rating,
        }
    }
}

impl ReportOverview {
    pub fn build<A: Moderated, B: Moderated>(
        products: &[Product],
        product_reviews: &[A],
        service_reviews: &[B],
    ) -> Self {
        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        for product in products {
            let key = product
                .category
                .name()
                .unwrap_or_else(|| product.category.id())
                .to_string();
            *by_category.entry(key).or_default() += 1;
        }

        let total_products = products.len();
        let average_price = (total_products > 0).then(|| {
            products.iter().map(Product::effective_price).sum::<f64>() / total_products as f64
        });

        Self {
            total_products,
            trending: products.iter().filter(|p| p.is_trending).count(),
            best_sellers: products.iter().filter(|p| p.is_best_seller).count(),
            special_deals: products.iter().filter(|p| p.is_special_deal).count(),
            discounted: products
                .iter()
                .filter(|p| p.effective_price() < p.price)
                .count(),
            average_price,
            by_category: by_category
                .into_iter()
                .map(|(category, products)| CategoryCount { category, products })
                .collect(),
            product_reviews: ModerationSummary::from_reviews(product_reviews),
            service_reviews: ModerationSummary::from_reviews(service_reviews),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Reference, ReferenceSummary, Review};

    fn product(id: &str, category: &str, price: f64, discount: Option<f64>) -> Product {
        Product {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            discount_price: discount,
            category: Reference::Populated(ReferenceSummary {
                id: format!("{category}-id"),
                name: Some(category.into()),
                slug: None,
            }),
            sub_category: None,
            images: vec![],
            rating: 0.0,
            tags: vec![],
            is_trending: id == "a",
            is_best_seller: false,
            is_special_deal: discount.is_some(),
            created_at: None,
        }
    }

    fn review(rating: u8, approved: bool, reports: u32) -> Review {
        Review {
            id: format!("r{rating}{approved}{reports}"),
            rating,
            comment: String::new(),
            is_approved: approved,
            report_count: reports,
            user: None,
            product: None,
            created_at: None,
        }
    }

    #[test]
    fn summarises_catalogue_and_moderation_queue() {
        let products = vec![
            product("a", "Shoes", 100.0, Some(80.0)),
            product("b", "Shoes", 50.0, None),
            product("c", "Bags", 30.0, None),
        ];
        let reviews = vec![review(5, true, 0), review(3, false, 2)];
        let none: Vec<Review> = vec![];

        let overview = ReportOverview::build(&products, &reviews, &none);

        assert_eq!(overview.total_products, 3);
        assert_eq!(overview.trending, 1);
        assert_eq!(overview.discounted, 1);
        assert_eq!(overview.average_price, Some(160.0 / 3.0));
        assert_eq!(
            overview.by_category,
            vec![
                CategoryCount { category: "Bags".into(), products: 1 },
                CategoryCount { category: "Shoes".into(), products: 2 },
            ]
        );
        assert_eq!(overview.product_reviews.pending, 1);
        assert_eq!(overview.product_reviews.reported, 1);
        assert_eq!(overview.product_reviews.average_rating, Some(4.0));
        assert_eq!(overview.service_reviews, ModerationSummary::default());
    }
}
