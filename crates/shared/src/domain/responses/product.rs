use crate::model::{Product, Review};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub reviews: Vec<Review>,
    pub review_count: usize,
    pub average_rating: Option<f64>,
}

impl ProductDetail {
    /// Only approved reviews are shown on the product page.
    pub fn new(product: Product, reviews: Vec<Review>) -> Self {
        let reviews: Vec<Review> = reviews.into_iter().filter(|r| r.is_approved).collect();
        let review_count = reviews.len();
        let average_rating = (review_count > 0).then(|| {
            reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / review_count as f64
        });

        Self {
            product,
            reviews,
            review_count,
            average_rating,
        }
    }
}
