//! Product catalog module.
//!
//! Contains products, their categories, and the storefront's seed list.

mod catalog;
mod category;
mod product;
mod seed;

pub(crate) use catalog::popularity;
pub use catalog::{Catalog, BEST_SELLER_LIMIT, FEATURED_LIMIT};
pub use category::{Audience, ProductCategory};
pub use product::{Product, ProductColor, Review};
pub use seed::storefront_products;
