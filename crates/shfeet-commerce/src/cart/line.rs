//! Cart lines.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductColor};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Identifies a line: one product in one size and colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color_name: String,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color_name: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color_name: color_name.into(),
        }
    }
}

/// A product in the cart with the chosen options.
///
/// Serialized with the storefront's field names; a list of these is what
/// gets persisted under the `cart` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Snapshot of the product when it was added.
    pub product: Product,
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: ProductColor,
}

impl CartLine {
    pub fn new(
        product: Product,
        quantity: u32,
        size: impl Into<String>,
        color: ProductColor,
    ) -> Self {
        Self {
            product,
            quantity,
            selected_size: size.into(),
            selected_color: color,
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id.clone(),
            self.selected_size.clone(),
            self.selected_color.name.clone(),
        )
    }

    /// Does this line hold the given product/size/colour?
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_size == key.size
            && self.selected_color.name == key.color_name
    }

    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }

    /// Short variant label, e.g. "Size 42 / Black".
    pub fn variant_label(&self) -> String {
        format!("Size {} / {}", self.selected_size, self.selected_color.name)
    }
}
