//! Listing query: filter, sort and page over the catalog.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{popularity, Product};
use crate::error::CommerceError;
use crate::search::{Pagination, ProductFilter, SearchResults};

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Featured products first, otherwise listing order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by purchase count, falling back to rating.
    BestSelling,
}

impl SortOption {
    pub const ALL: [SortOption; 7] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::Rating,
        SortOption::BestSelling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::Rating => "rating",
            SortOption::BestSelling => "best-selling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Rating => "Highest Rated",
            SortOption::BestSelling => "Best Selling",
        }
    }

    /// Ordering between two products. Ties keep listing order because the
    /// sort is stable.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => b.featured.cmp(&a.featured),
            SortOption::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortOption::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOption::Rating => {
                let a = a.average_rating().unwrap_or(0.0);
                let b = b.average_rating().unwrap_or(0.0);
                b.total_cmp(&a)
            }
            SortOption::BestSelling => popularity(b).total_cmp(&popularity(a)),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == wanted)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown sort option '{}'", s)))
    }
}

/// A listing query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text matched against name and description, case-insensitively.
    pub text: Option<String>,
    pub filter: ProductFilter,
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            text: None,
            filter: ProductFilter::default(),
            sort: SortOption::Featured,
            page: 1,
            per_page: 12,
        }
    }

    /// Set the text query. Blank text clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = text.trim();
        self.text = (!text.is_empty()).then(|| text.to_string());
        self
    }

    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    fn matches_text(&self, product: &Product) -> bool {
        match &self.text {
            None => true,
            Some(text) => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        }
    }

    /// Filter, sort and slice out the requested page.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<&'a Product> {
        let mut hits: Vec<&Product> = self
            .filter
            .apply(products)
            .into_iter()
            .filter(|p| self.matches_text(p))
            .collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));

        let pagination = Pagination::new(self.page, self.per_page, hits.len() as i64);
        let items = hits
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(self.per_page as usize)
            .collect();

        tracing::debug!(
            sort = self.sort.as_str(),
            total = pagination.total,
            page = pagination.page,
            "ran product query"
        );
        SearchResults::new(items, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProductCategory};

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new()
            .with_text("  boot ")
            .with_sort(SortOption::PriceAsc)
            .with_pagination(0, 500);

        assert_eq!(query.text.as_deref(), Some("boot"));
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);
        assert!(SearchQuery::new().with_text("   ").text.is_none());
    }

    #[test]
    fn test_price_sort() {
        let catalog = Catalog::storefront();
        let results = SearchQuery::new()
            .with_sort(SortOption::PriceAsc)
            .with_pagination(1, 100)
            .run(catalog.all());
        let prices: Vec<i64> = results.items.iter().map(|p| p.price.amount_minor).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted);

        let results = SearchQuery::new()
            .with_sort(SortOption::PriceDesc)
            .run(catalog.all());
        assert_eq!(results.items[0].name, "Desert Ankle Boot");
    }

    #[test]
    fn test_featured_sort_is_stable() {
        let catalog = Catalog::storefront();
        let results = SearchQuery::new().with_pagination(1, 100).run(catalog.all());
        let ids: Vec<&str> = results.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(&ids[..5], &["1", "3", "5", "8", "12"]);
    }

    #[test]
    fn test_text_and_filter_combine() {
        let catalog = Catalog::storefront();
        let filter = ProductFilter::new().with_categories([ProductCategory::Boots]);
        let results = SearchQuery::new()
            .with_text("suede")
            .with_filter(filter)
            .run(catalog.all());
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].id.as_str(), "9");
    }

    #[test]
    fn test_pagination_slices_results() {
        let catalog = Catalog::storefront();
        let results = SearchQuery::new()
            .with_sort(SortOption::NameAsc)
            .with_pagination(2, 5)
            .run(catalog.all());
        assert_eq!(results.len(), 5);
        assert_eq!(results.pagination.total, catalog.len() as i64);
        assert_eq!(results.pagination.total_pages, 3);
        assert!(results.pagination.has_prev);
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("price-asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
