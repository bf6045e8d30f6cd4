//! Product listing filters.

use serde::{Deserialize, Serialize};

use crate::catalog::{Audience, Product, ProductCategory};
use crate::error::CommerceError;
use crate::money::Money;

/// Upper end of the filter panel's price slider, in Naira.
pub const DEFAULT_MAX_PRICE_NAIRA: i64 = 50_000;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.currency != max.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: min.currency.to_string(),
                got: max.currency.to_string(),
            });
        }
        if min.amount_minor > max.amount_minor {
            return Err(CommerceError::ValidationError(format!(
                "price range minimum {} is above maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && price.amount_minor >= self.min.amount_minor
            && price.amount_minor <= self.max.amount_minor
    }
}

impl Default for PriceRange {
    /// The slider's initial position: ₦0 to ₦50,000.
    fn default() -> Self {
        Self {
            min: Money::naira(0),
            max: Money::naira(DEFAULT_MAX_PRICE_NAIRA),
        }
    }
}

/// Filter state for the product listing.
///
/// Empty category and audience sets match everything. A missing price range
/// means no price bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub categories: Vec<ProductCategory>,
    pub audiences: Vec<Audience>,
    pub price_range: Option<PriceRange>,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial filter from listing URL parameters.
    ///
    /// `category` names the audience (`men`, `women`, `children`) and
    /// `product_type` names the product category (`sandals`, `half-shoes`, ...).
    /// Blank values are ignored; unknown ones are rejected.
    pub fn from_query(
        category: Option<&str>,
        product_type: Option<&str>,
    ) -> Result<Self, CommerceError> {
        let mut filter = Self::new();
        if let Some(value) = category.filter(|v| !v.trim().is_empty()) {
            filter.audiences.push(value.parse()?);
        }
        if let Some(value) = product_type.filter(|v| !v.trim().is_empty()) {
            filter.categories.push(value.parse()?);
        }
        Ok(filter)
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = ProductCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_audiences(mut self, audiences: impl IntoIterator<Item = Audience>) -> Self {
        self.audiences = audiences.into_iter().collect();
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self
    }

    /// Tick or untick a category checkbox.
    pub fn toggle_category(&mut self, category: ProductCategory) {
        toggle(&mut self.categories, category);
    }

    /// Tick or untick an audience checkbox.
    pub fn toggle_audience(&mut self, audience: Audience) {
        toggle(&mut self.audiences, audience);
    }

    /// Back to the panel defaults: nothing ticked, full slider range.
    pub fn reset(&mut self) {
        *self = Self {
            price_range: Some(PriceRange::default()),
            ..Self::default()
        };
    }

    /// Number of active constraints, for a "Filters (n)" badge.
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.audiences.len()
            + usize::from(self.in_stock_only)
            + usize::from(self.price_range.is_some_and(|r| r != PriceRange::default()))
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.audiences.is_empty() && !self.audiences.contains(&product.for_whom) {
            return false;
        }
        if let Some(range) = &self.price_range {
            if !range.contains(&product.price) {
                return false;
            }
        }
        !self.in_stock_only || product.in_stock
    }

    /// Matching products, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = Catalog::storefront();
        assert_eq!(ProductFilter::new().apply(catalog.all()).len(), catalog.len());
    }

    #[test]
    fn test_from_query() {
        let filter = ProductFilter::from_query(Some("women"), Some("sandals")).unwrap();
        assert_eq!(filter.audiences, vec![Audience::Women]);
        assert_eq!(filter.categories, vec![ProductCategory::Sandals]);
        assert!(filter.price_range.is_none());

        let catalog = Catalog::storefront();
        let hits = filter.apply(catalog.all());
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|p| p.for_whom == Audience::Women && p.category == ProductCategory::Sandals));
    }

    #[test]
    fn test_from_query_rejects_unknown_values() {
        assert!(ProductFilter::from_query(Some("pets"), None).is_err());
        assert!(ProductFilter::from_query(None, Some("loafers")).is_err());
        assert_eq!(ProductFilter::from_query(Some(""), None).unwrap(), ProductFilter::new());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(Money::naira(5_000), Money::naira(12_000)).unwrap();
        assert!(range.contains(&Money::naira(5_000)));
        assert!(range.contains(&Money::naira(12_000)));
        assert!(!range.contains(&Money::naira(12_001)));
        assert!(PriceRange::new(Money::naira(10), Money::naira(5)).is_err());
    }

    #[test]
    fn test_reset_restores_panel_defaults() {
        let catalog = Catalog::storefront();
        let mut filter = ProductFilter::new().in_stock_only(true);
        filter.toggle_category(ProductCategory::Boots);
        filter.reset();

        assert!(filter.categories.is_empty());
        assert!(!filter.in_stock_only);
        assert_eq!(filter.price_range, Some(PriceRange::default()));
        assert!(filter
            .apply(catalog.all())
            .iter()
            .all(|p| p.price.major_units() <= DEFAULT_MAX_PRICE_NAIRA));
    }

    #[test]
    fn test_in_stock_and_toggle() {
        let catalog = Catalog::storefront();
        let mut filter = ProductFilter::new();
        filter.toggle_category(ProductCategory::Boots);
        assert_eq!(filter.apply(catalog.all()).len(), 2);

        filter.in_stock_only = true;
        assert_eq!(filter.apply(catalog.all()).len(), 1);

        filter.toggle_category(ProductCategory::Boots);
        assert!(filter.categories.is_empty());
        assert_eq!(filter.active_count(), 1);
    }
}
