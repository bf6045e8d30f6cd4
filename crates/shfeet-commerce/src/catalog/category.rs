//! Product categories and target audiences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// The kind of footwear a product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Sandals,
    Slides,
    Shoes,
    HalfShoes,
    Boots,
    Kids,
    Birkenstock,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Sandals,
        ProductCategory::Slides,
        ProductCategory::Shoes,
        ProductCategory::HalfShoes,
        ProductCategory::Boots,
        ProductCategory::Kids,
        ProductCategory::Birkenstock,
    ];

    /// URL/storage form, e.g. `half-shoes`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Sandals => "sandals",
            ProductCategory::Slides => "slides",
            ProductCategory::Shoes => "shoes",
            ProductCategory::HalfShoes => "half-shoes",
            ProductCategory::Boots => "boots",
            ProductCategory::Kids => "kids",
            ProductCategory::Birkenstock => "birkenstock",
        }
    }

    /// Label shown in the filter panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Sandals => "Sandals",
            ProductCategory::Slides => "Slides",
            ProductCategory::Shoes => "Shoes",
            ProductCategory::HalfShoes => "Half Shoes",
            ProductCategory::Boots => "Boots",
            ProductCategory::Kids => "Kids",
            ProductCategory::Birkenstock => "Birkenstock",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown product type '{}'", s)))
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a product is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Men,
    Women,
    Children,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Men, Audience::Women, Audience::Children];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Men => "men",
            Audience::Women => "women",
            Audience::Children => "children",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Audience::Men => "Men",
            Audience::Women => "Women",
            Audience::Children => "Children",
        }
    }
}

impl FromStr for Audience {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Audience::Men),
            "women" => Ok(Audience::Women),
            "children" => Ok(Audience::Children),
            _ => Err(CommerceError::ValidationError(format!(
                "unknown category '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
