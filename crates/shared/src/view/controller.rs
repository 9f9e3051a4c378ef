use crate::{
    domain::{
        requests::ListingQuery,
        responses::{EmptyState, ListingPage},
    },
    model::Product,
    view::{FilterSet, PageCursor, SortKey, sort_products},
};
use strum_macros::{Display, EnumString};

/// Storefront pages sharing the listing machinery, each with its own base filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ListingPreset {
    Shop,
    Trending,
    NewArrivals,
    BestSellers,
    SpecialDeals,
}

impl ListingPreset {
    pub fn default_sort(self) -> SortKey {
        match self {
            ListingPreset::Shop | ListingPreset::NewArrivals => SortKey::Newest,
            ListingPreset::Trending | ListingPreset::BestSellers => SortKey::Rating,
            ListingPreset::SpecialDeals => SortKey::PriceLow,
        }
    }

    /// The visitor's query with this page's fixed criteria folded in.
    pub fn scope(self, query: &ListingQuery) -> ListingQuery {
        let mut scoped = query.clone();
        match self {
            ListingPreset::Shop | ListingPreset::NewArrivals => {}
            ListingPreset::Trending => scoped.trending = Some(true),
            ListingPreset::BestSellers => scoped.best_seller = Some(true),
            ListingPreset::SpecialDeals => scoped.special_deal = Some(true),
        }
        if scoped.sort.is_none() {
            scoped.sort = Some(self.default_sort());
        }
        scoped
    }

    fn empty_state(self) -> EmptyState {
        let title = match self {
            ListingPreset::Shop => "No products found",
            ListingPreset::Trending => "Nothing trending right now",
            ListingPreset::NewArrivals => "No new arrivals yet",
            ListingPreset::BestSellers => "No best sellers yet",
            ListingPreset::SpecialDeals => "No special deals at the moment",
        };
        EmptyState {
            title: title.to_string(),
            message: "Try adjusting your filters or check back later.".to_string(),
        }
    }
}

/// Composes the reducer and the cursor over an already fetched product list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingController {
    cursor: PageCursor,
}

impl ListingController {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: PageCursor::new(page_size),
        }
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn reduce(&self, items: &[Product], query: &ListingQuery) -> Vec<Product> {
        let filtered = FilterSet::from(query).apply(items);
        sort_products(filtered, query.sort.unwrap_or_default())
    }

    pub fn render(
        &self,
        items: &[Product],
        query: &ListingQuery,
        preset: ListingPreset,
    ) -> ListingPage<Product> {
        let scoped = preset.scope(query);
        let ordered = self.reduce(items, &scoped);
        paginate(&ordered, self.cursor, scoped.page.unwrap_or(1), || {
            preset.empty_state()
        })
    }
}

/// Windows any ordered list; an empty list carries the caller's empty state.
pub fn paginate<T: Clone>(
    items: &[T],
    cursor: PageCursor,
    page: i64,
    empty: impl FnOnce() -> EmptyState,
) -> ListingPage<T> {
    let window = cursor.window(items.len(), page);

    ListingPage {
        items: window.slice(items).to_vec(),
        pagination: window.into(),
        total_matched: items.len(),
        empty: items.is_empty().then(empty),
    }
}
