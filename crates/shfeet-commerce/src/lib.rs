//! Storefront domain logic for SHFeet.
//!
//! This crate holds everything the shop does apart from rendering:
//!
//! - **Catalog**: Products, categories, the seed list
//! - **Search**: Filters, sorting, pagination
//! - **Cart**: The cart engine, delivery pricing, promo codes
//! - **Checkout**: Shipping details, payment hand-off, order snapshots
//! - **Contact**: The contact form
//!
//! # Example
//!
//! ```rust,ignore
//! use shfeet_cache::Cache;
//! use shfeet_commerce::prelude::*;
//!
//! let catalog = Catalog::storefront();
//! let slide = catalog.find("1").unwrap();
//! let black = slide.validate_selection(Some("42"), Some("Black"))?;
//!
//! let mut cart = Cart::restore(Cache::open_dir(".shfeet")?);
//! cart.add_item(slide, 2, "42", &black)?;
//! cart.apply_promo("save10");
//!
//! println!("Total: {}", cart.totals().total);
//! for notice in cart.take_notices() {
//!     println!("{}", notice);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notice;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use notice::{Notice, NoticeLevel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::{Notice, NoticeLevel};

    // Catalog
    pub use crate::catalog::{Audience, Catalog, Product, ProductCategory, ProductColor, Review};

    // Cart
    pub use crate::cart::{
        compute_totals, AppliedPromo, Cart, CartLine, CartTotals, DeliveryFeePolicy, DeliveryTier,
        LineKey, PromoCode, PromoTable,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutResult, CheckoutStep, DeliveryWindow, OrderLogger, OrderSnapshot,
        PaymentGateway, PaymentOutcome, PaymentRequest, ShippingAddress,
    };

    pub use crate::contact::ContactMessage;

    // Search
    pub use crate::search::{
        Pagination, PriceRange, ProductFilter, SearchQuery, SearchResults, SortOption,
    };
}
