//! Search module.
//!
//! Filters, sorting and pagination for the product listing.

mod filter;
mod query;
mod results;

pub use filter::{PriceRange, ProductFilter, DEFAULT_MAX_PRICE_NAIRA};
pub use query::{SearchQuery, SortOption};
pub use results::{Pagination, SearchResults};
