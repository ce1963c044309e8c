//! Product listing query builder.
//!
//! The filter sidebar maps its selections onto a [`ProductQuery`]; every
//! change produces a new query and a re-fetch. Nothing is filtered
//! client-side from already-fetched results.

use crate::ids::{BrandId, CategoryId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Newest first (default).
    #[default]
    Newest,
    /// By price.
    Price,
    /// By name.
    Name,
    /// By sales count.
    BestSelling,
}

impl SortKey {
    /// Wire value for the `sortBy` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "createdAt",
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::BestSelling => "soldCount",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Price => "Price",
            SortKey::Name => "Name",
            SortKey::BestSelling => "Best Selling",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire value for the `sortDirection` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A product listing query: page, free-text search, price range, category,
/// brand and sort selection.
///
/// `page` is 1-indexed here (what the pager displays); the backend expects
/// 0-indexed pages, and the translation happens in [`to_query_pairs`] and
/// nowhere else.
///
/// [`to_query_pairs`]: ProductQuery::to_query_pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Page number, 1-indexed.
    pub page: i64,
    /// Items per page.
    pub size: i64,
    /// Free-text search term.
    pub search: Option<String>,
    /// Minimum price filter.
    pub min_price: Option<Money>,
    /// Maximum price filter.
    pub max_price: Option<Money>,
    /// Category filter.
    pub category_id: Option<CategoryId>,
    /// Brand filter.
    pub brand_id: Option<BrandId>,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductQuery {
    /// Create a query for the first page with defaults.
    pub fn new() -> Self {
        Self {
            page: 1,
            size: 12,
            search: None,
            min_price: None,
            max_price: None,
            category_id: None,
            brand_id: None,
            sort_by: SortKey::Newest,
            sort_direction: SortDirection::Desc,
        }
    }

    /// Set the page (clamped to at least 1).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set items per page (clamped to 1..=100).
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size.clamp(1, 100);
        self
    }

    /// Set the search term. An empty term clears the filter.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Filter by category.
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Filter by brand.
    pub fn with_brand(mut self, id: BrandId) -> Self {
        self.brand_id = Some(id);
        self
    }

    /// Set the sort key and direction.
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_by = key;
        self.sort_direction = direction;
        self
    }

    /// Build the wire query parameters.
    ///
    /// The page is translated from the 1-indexed display value to the
    /// backend's 0-indexed value here.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), (self.page - 1).max(0).to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(min) = &self.min_price {
            pairs.push(("minPrice".to_string(), min.amount.to_string()));
        }
        if let Some(max) = &self.max_price {
            pairs.push(("maxPrice".to_string(), max.amount.to_string()));
        }
        if let Some(category) = &self.category_id {
            pairs.push(("categoryId".to_string(), category.to_string()));
        }
        if let Some(brand) = &self.brand_id {
            pairs.push(("brandId".to_string(), brand.to_string()));
        }
        pairs.push(("sortBy".to_string(), self.sort_by.as_str().to_string()));
        pairs.push((
            "sortDirection".to_string(),
            self.sort_direction.as_str().to_string(),
        ));
        pairs
    }
}
