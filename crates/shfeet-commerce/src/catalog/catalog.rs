//! In-memory product catalog.

use super::product::Product;
use super::seed::storefront_products;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Number of products on the home page best-seller strip.
pub const BEST_SELLER_LIMIT: usize = 9;

/// Number of products in the featured strip.
pub const FEATURED_LIMIT: usize = 4;

/// A read-only list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The store's built-in catalog.
    pub fn storefront() -> Self {
        Self::new(storefront_products())
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        let id = id.trim();
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Like [`find`](Self::find), but an error when the id is unknown.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find(id.as_str())
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Other products in the same category.
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .collect()
    }

    /// Most-bought products first. Products without a purchase count rank
    /// by their rating instead.
    pub fn best_sellers(&self, limit: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| popularity(b).total_cmp(&popularity(a)));
        ranked.truncate(limit);
        ranked
    }

    /// Products flagged as featured, in listing order.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).take(limit).collect()
    }
}

pub(crate) fn popularity(product: &Product) -> f32 {
    match product.most_bought {
        Some(count) if count > 0 => count as f32,
        _ => product.ratings.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;

    #[test]
    fn test_storefront_catalog_is_well_formed() {
        let catalog = Catalog::storefront();
        assert!(!catalog.is_empty());
        for product in catalog.all() {
            assert!(product.price.is_positive(), "{} has no price", product.id);
            assert!(!product.sizes.is_empty(), "{} has no sizes", product.id);
            assert!(!product.colors.is_empty(), "{} has no colors", product.id);
        }

        let mut ids: Vec<_> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::storefront();
        assert_eq!(catalog.find("1").unwrap().name, "Classic Leather Slide");
        assert!(catalog.find("999").is_none());
        assert!(matches!(
            catalog.get(&ProductId::new("999")),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::storefront();
        let slide = catalog.find("1").unwrap();
        let related = catalog.related(slide);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == ProductCategory::Slides));
        assert!(related.iter().all(|p| p.id != slide.id));
    }

    #[test]
    fn test_best_sellers_order() {
        let catalog = Catalog::storefront();
        let top = catalog.best_sellers(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].id.as_str(), "1");
        assert_eq!(top[1].id.as_str(), "2");
        assert_eq!(top[2].id.as_str(), "12");
    }

    #[test]
    fn test_featured_respects_limit() {
        let catalog = Catalog::storefront();
        let featured = catalog.featured(FEATURED_LIMIT);
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.featured));
    }
}
