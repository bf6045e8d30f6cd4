//! Shopping cart module.
//!
//! Contains the cart engine, its lines, pricing and promo codes.

mod cart;
mod line;
mod pricing;
mod promo;

pub use cart::{AppliedPromo, Cart, CART_STORAGE_KEY};
pub use line::{CartLine, LineKey};
pub use pricing::{
    compute_totals, CartTotals, DeliveryFeePolicy, DeliveryTier, FEW_ITEMS_FEE_NAIRA,
    FEW_ITEMS_LIMIT, FREE_DELIVERY_THRESHOLD_NAIRA, MANY_ITEMS_FEE_NAIRA,
};
pub use promo::{PromoCode, PromoTable};
