use crate::{
    domain::requests::{ListingQuery, non_blank},
    model::{Product, ProductFlag},
};

/// A single inclusion test applied to every product of a listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPredicate {
    /// Category id or slug.
    Category(String),
    SubCategory(String),
    /// Inclusive bounds on the effective price.
    PriceRange { min: Option<f64>, max: Option<f64> },
    Flag(ProductFlag),
    Tag(String),
    /// Case-insensitive substring of the product name.
    Search(String),
}

impl ProductPredicate {
    pub fn test(&self, product: &Product) -> bool {
        match self {
            ProductPredicate::Category(key) => product.category.matches(key),
            ProductPredicate::SubCategory(key) => product
                .sub_category
                .as_ref()
                .is_some_and(|sub| sub.matches(key)),
            ProductPredicate::PriceRange { min, max } => {
                let price = product.effective_price();
                min.is_none_or(|min| price >= min) && max.is_none_or(|max| price <= max)
            }
            ProductPredicate::Flag(flag) => product.has_flag(*flag),
            ProductPredicate::Tag(tag) => product.has_tag(tag),
            ProductPredicate::Search(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Conjunction of predicates. The empty set accepts everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<ProductPredicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: ProductPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn and(mut self, other: FilterSet) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    pub fn predicates(&self) -> &[ProductPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn accepts(&self, product: &Product) -> bool {
        self.predicates.iter().all(|p| p.test(product))
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.accepts(p))
            .cloned()
            .collect()
    }
}

impl From<&ListingQuery> for FilterSet {
    fn from(query: &ListingQuery) -> Self {
        let mut set = FilterSet::new();

        if let Some(category) = non_blank(&query.category) {
            set = set.with(ProductPredicate::Category(category));
        }
        if let Some(sub) = non_blank(&query.subcategory) {
            set = set.with(ProductPredicate::SubCategory(sub));
        }
        if query.min_price.is_some() || query.max_price.is_some() {
            set = set.with(ProductPredicate::PriceRange {
                min: query.min_price,
                max: query.max_price,
            });
        }
        if query.trending == Some(true) {
            set = set.with(ProductPredicate::Flag(ProductFlag::Trending));
        }
        if query.best_seller == Some(true) {
            set = set.with(ProductPredicate::Flag(ProductFlag::BestSeller));
        }
        if query.special_deal == Some(true) {
            set = set.with(ProductPredicate::Flag(ProductFlag::SpecialDeal));
        }
        if let Some(tag) = non_blank(&query.tag) {
            set = set.with(ProductPredicate::Tag(tag));
        }
        if let Some(search) = non_blank(&query.search) {
            set = set.with(ProductPredicate::Search(search));
        }

        set
    }
}
