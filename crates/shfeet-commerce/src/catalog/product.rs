//! Product types.

use serde::{Deserialize, Serialize};

use super::category::{Audience, ProductCategory};
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::money::Money;

/// A colour option, as a display name and a CSS colour value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub value: String,
}

impl ProductColor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A shopper review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    /// ISO date, e.g. `2024-03-02`.
    pub date: String,
}

/// A product in the catalog.
///
/// Cart lines carry a full copy of the product, so this is also what gets
/// persisted and what the order log receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, as whole Naira on the wire.
    #[serde(with = "crate::money::naira")]
    pub price: Money,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: ProductCategory,
    pub for_whom: Audience,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    #[serde(default)]
    pub featured: bool,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_bought: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Create an in-stock product with no options yet.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: ProductCategory,
        for_whom: Audience,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            images: Vec::new(),
            category,
            for_whom,
            sizes: Vec::new(),
            colors: Vec::new(),
            featured: false,
            in_stock: true,
            ratings: None,
            most_bought: None,
            reviews: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors(mut self, colors: Vec<ProductColor>) -> Self {
        self.colors = colors;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.ratings = Some(rating);
        self
    }

    pub fn with_most_bought(mut self, count: u32) -> Self {
        self.most_bought = Some(count);
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// First image, used as the thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Look up a colour by name, ignoring case.
    pub fn color(&self, name: &str) -> Option<&ProductColor> {
        let name = name.trim();
        self.colors.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Does the product come in this size?
    pub fn has_size(&self, size: &str) -> bool {
        let size = size.trim();
        self.sizes.iter().any(|s| s == size)
    }

    /// Check a size/colour choice before it goes into the cart and return
    /// the chosen colour.
    pub fn validate_selection(
        &self,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<ProductColor, CommerceError> {
        if !self.in_stock {
            return Err(CommerceError::ProductUnavailable(self.name.clone()));
        }

        let size = size.map(str::trim).filter(|s| !s.is_empty());
        match size {
            Some(size) if self.has_size(size) => {}
            _ => return Err(CommerceError::InvalidSelection("Please select a size".into())),
        }

        color
            .and_then(|name| self.color(name))
            .cloned()
            .ok_or_else(|| CommerceError::InvalidSelection("Please select a color".into()))
    }

    /// Average review rating, or the catalog rating when there are no
    /// reviews.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return self.ratings;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(total as f32 / self.reviews.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Product {
        Product::new(
            "1",
            "Classic Leather Slide",
            Money::naira(5_000),
            ProductCategory::Slides,
            Audience::Men,
        )
        .with_sizes(["41", "42", "43"])
        .with_colors(vec![
            ProductColor::new("Black", "#000000"),
            ProductColor::new("Brown", "#8B4513"),
        ])
    }

    #[test]
    fn test_validate_selection() {
        let product = slide();
        let color = product.validate_selection(Some("42"), Some("black")).unwrap();
        assert_eq!(color.name, "Black");
    }

    #[test]
    fn test_validate_selection_requires_size_then_color() {
        let product = slide();
        let err = product.validate_selection(None, Some("Black")).unwrap_err();
        assert_eq!(err.to_string(), "Please select a size");

        let err = product.validate_selection(Some("50"), Some("Black")).unwrap_err();
        assert_eq!(err.to_string(), "Please select a size");

        let err = product.validate_selection(Some("42"), Some("Purple")).unwrap_err();
        assert_eq!(err.to_string(), "Please select a color");
    }

    #[test]
    fn test_out_of_stock_cannot_be_selected() {
        let product = slide().out_of_stock();
        assert!(matches!(
            product.validate_selection(Some("42"), Some("Black")),
            Err(CommerceError::ProductUnavailable(_))
        ));
    }

    #[test]
    fn test_serde_uses_storefront_field_names() {
        let json = serde_json::to_value(slide().with_most_bought(3)).unwrap();
        assert_eq!(json["forWhom"], "men");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["mostBought"], 3);
        assert!(json.get("ratings").is_none());
    }

    #[test]
    fn test_average_rating_prefers_reviews() {
        let product = slide().with_rating(3.0).with_reviews(vec![
            Review {
                id: ReviewId::new("r1"),
                user_name: "Tunde".into(),
                rating: 5,
                comment: "Great".into(),
                date: "2024-01-10".into(),
            },
            Review {
                id: ReviewId::new("r2"),
                user_name: "Ada".into(),
                rating: 4,
                comment: "Comfy".into(),
                date: "2024-02-01".into(),
            },
        ]);
        assert_eq!(product.average_rating(), Some(4.5));
        assert_eq!(slide().with_rating(3.0).average_rating(), Some(3.0));
    }
}
