//! The shopping cart engine.

use shfeet_cache::Cache;

use crate::cart::{compute_totals, CartLine, CartTotals, DeliveryFeePolicy, LineKey, PromoTable};
use crate::catalog::{Product, ProductColor};
use crate::error::CommerceError;
use crate::notice::Notice;

/// Storage key holding the persisted line list.
pub const CART_STORAGE_KEY: &str = "cart";

/// The promo currently applied to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPromo {
    pub code: String,
    pub discount_percent: u8,
}

/// A shopping cart.
///
/// Owns its lines, the active promo and the derived totals. Every mutation
/// recomputes the totals before returning and writes the lines to the
/// backing [`Cache`]. Shopper-facing messages queue up until
/// [`take_notices`](Self::take_notices) drains them.
pub struct Cart {
    lines: Vec<CartLine>,
    promo: Option<AppliedPromo>,
    totals: CartTotals,
    policy: DeliveryFeePolicy,
    promos: PromoTable,
    cache: Cache,
    notices: Vec<Notice>,
}

impl Cart {
    /// Create an empty cart over the given storage without reading it.
    pub fn new(cache: Cache) -> Self {
        let policy = DeliveryFeePolicy::default();
        Self {
            lines: Vec::new(),
            promo: None,
            totals: CartTotals::empty(policy.currency()),
            policy,
            promos: PromoTable::storefront(),
            cache,
            notices: Vec::new(),
        }
    }

    /// Load the persisted lines, if any.
    ///
    /// Missing, unreadable or malformed data gives an empty cart; the
    /// problem is logged and nothing is shown to the shopper.
    pub fn restore(cache: Cache) -> Self {
        let mut cart = Self::new(cache);
        match cart.cache.get::<Vec<CartLine>>(CART_STORAGE_KEY) {
            Ok(Some(lines)) => match compute_totals(&lines, 0, &cart.policy) {
                Ok(totals) => {
                    tracing::debug!(lines = lines.len(), "restored cart");
                    cart.lines = lines;
                    cart.totals = totals;
                }
                Err(e) => tracing::warn!(error = %e, "discarding stored cart"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read stored cart"),
        }
        cart
    }

    /// Replace the delivery fee policy.
    pub fn with_policy(mut self, policy: DeliveryFeePolicy) -> Result<Self, CommerceError> {
        self.totals = compute_totals(&self.lines, self.discount_percent(), &policy)?;
        self.policy = policy;
        Ok(self)
    }

    /// Replace the table of accepted promo codes.
    pub fn with_promos(mut self, promos: PromoTable) -> Self {
        self.promos = promos;
        self
    }

    /// Add a product in the given size and colour.
    ///
    /// A line with the same product, size and colour has its quantity
    /// increased instead of a second line being created.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
        color: &ProductColor,
    ) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let key = LineKey::new(product.id.clone(), size, color.name.clone());
        let mut lines = self.lines.clone();
        let notice = match lines.iter_mut().find(|l| l.matches(&key)) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CommerceError::Overflow)?;
                Notice::success("Cart updated")
                    .with_description(format!("Updated quantity of {}", product.name))
            }
            None => {
                lines.push(CartLine::new(product.clone(), quantity, size, color.clone()));
                Notice::success("Added to cart")
                    .with_description(format!("{} \u{00d7} {} added to your cart", quantity, product.name))
            }
        };

        self.commit(lines)?;
        tracing::debug!(product = %product.id, size, color = %color.name, quantity, "added to cart");
        self.notices.push(notice);
        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// Returns `false` when no line matches. Zero is stored as given; the
    /// line stays until removed.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) -> Result<bool, CommerceError> {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|l| l.matches(key)) {
            Some(line) => line.quantity = quantity,
            None => return Ok(false),
        }

        self.commit(lines)?;
        tracing::debug!(product = %key.product_id, quantity, "updated cart quantity");
        Ok(true)
    }

    /// Remove a line. Returns `false`, changing nothing, when no line
    /// matches.
    pub fn remove_item(&mut self, key: &LineKey) -> Result<bool, CommerceError> {
        if !self.lines.iter().any(|l| l.matches(key)) {
            return Ok(false);
        }

        let lines = self.lines.iter().filter(|l| !l.matches(key)).cloned().collect();
        self.commit(lines)?;
        tracing::debug!(product = %key.product_id, "removed from cart");
        self.notices.push(Notice::info("Item removed").with_description("Item removed from cart"));
        Ok(true)
    }

    /// Empty the cart and drop any promo.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promo = None;
        self.totals = CartTotals::empty(self.policy.currency());
        self.persist();
        tracing::debug!("cleared cart");
        self.notices.push(
            Notice::info("Cart cleared").with_description("All items have been removed from your cart"),
        );
    }

    /// Apply a promo code. Returns whether it was accepted.
    ///
    /// Unknown or blank codes leave the cart untouched.
    pub fn apply_promo(&mut self, code: &str) -> bool {
        let Some(promo) = self.promos.lookup(code).cloned() else {
            tracing::debug!(code, "rejected promo code");
            self.notices.push(
                Notice::destructive("Invalid promo code")
                    .with_description("The promo code you entered is not valid."),
            );
            return false;
        };

        match compute_totals(&self.lines, promo.discount_percent(), &self.policy) {
            Ok(totals) => self.totals = totals,
            Err(e) => {
                tracing::warn!(error = %e, "failed to price promo");
                return false;
            }
        }
        self.promo = Some(AppliedPromo {
            code: promo.code().to_string(),
            discount_percent: promo.discount_percent(),
        });
        tracing::debug!(code = promo.code(), percent = promo.discount_percent(), "applied promo code");
        self.notices.push(
            Notice::success("Promo code applied!")
                .with_description(format!("{}% off your total order!", promo.discount_percent())),
        );
        true
    }

    /// Drop the active promo, if any.
    pub fn remove_promo(&mut self) {
        self.promo = None;
        match compute_totals(&self.lines, 0, &self.policy) {
            Ok(totals) => self.totals = totals,
            Err(e) => tracing::warn!(error = %e, "failed to reprice cart"),
        }
        self.notices.push(
            Notice::info("Promo code removed").with_description("Your promo code has been removed."),
        );
    }

    /// Queue a notice from outside the cart, e.g. checkout.
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Hand over all queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn find_line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    pub fn promo(&self) -> Option<&AppliedPromo> {
        self.promo.as_ref()
    }

    pub fn policy(&self) -> &DeliveryFeePolicy {
        &self.policy
    }

    /// Total quantity across lines.
    pub fn item_count(&self) -> u32 {
        self.totals.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Delivery line for the summary, e.g. "Free Shipping".
    pub fn delivery_message(&self) -> String {
        self.policy.describe(self.totals.delivery_tier)
    }

    /// Give back the storage, e.g. to restore another cart from it.
    pub fn into_cache(self) -> Cache {
        self.cache
    }

    fn discount_percent(&self) -> u8 {
        self.promo.as_ref().map_or(0, |p| p.discount_percent)
    }

    /// Price the candidate lines and, if that succeeds, make them current.
    fn commit(&mut self, lines: Vec<CartLine>) -> Result<(), CommerceError> {
        self.totals = compute_totals(&lines, self.discount_percent(), &self.policy)?;
        self.lines = lines;
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(CART_STORAGE_KEY, &self.lines) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("lines", &self.lines.len())
            .field("promo", &self.promo)
            .field("totals", &self.totals)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Audience, ProductCategory};
    use crate::money::Money;
    use crate::notice::NoticeLevel;

    fn slide() -> Product {
        Product::new(
            "1",
            "Classic Leather Slide",
            Money::naira(5_000),
            ProductCategory::Slides,
            Audience::Men,
        )
        .with_sizes(["42", "43"])
        .with_colors(vec![
            ProductColor::new("Black", "#000000"),
            ProductColor::new("Brown", "#8B4513"),
        ])
    }

    fn black() -> ProductColor {
        ProductColor::new("Black", "#000000")
    }

    fn key(size: &str, color: &str) -> LineKey {
        LineKey::new("1", size, color)
    }

    #[test]
    fn test_add_same_key_merges() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 2, "42", &black()).unwrap();
        cart.add_item(&slide(), 1, "42", &black()).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.totals().subtotal, Money::naira(15_000));

        let titles: Vec<_> = cart.take_notices().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Added to cart", "Cart updated"]);
        assert!(cart.take_notices().is_empty());
    }

    #[test]
    fn test_distinct_options_are_distinct_lines() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 1, "42", &black()).unwrap();
        cart.add_item(&slide(), 1, "43", &black()).unwrap();
        cart.add_item(&slide(), 1, "42", &ProductColor::new("Brown", "#8B4513")).unwrap();
        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new(Cache::memory());
        assert!(matches!(
            cart.add_item(&slide(), 0, "42", &black()),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 1, "42", &black()).unwrap();
        assert!(matches!(
            cart.add_item(&slide(), u32::MAX, "42", &black()),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 1, "42", &black()).unwrap();

        assert!(cart.update_quantity(&key("42", "Black"), 5).unwrap());
        assert_eq!(cart.totals().subtotal, Money::naira(25_000));
        assert_eq!(cart.totals().delivery_fee, Money::naira(6_000));

        assert!(!cart.update_quantity(&key("44", "Black"), 2).unwrap());
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 2, "42", &black()).unwrap();
        cart.take_notices();
        let before = *cart.totals();

        assert!(!cart.remove_item(&key("43", "Black")).unwrap());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(*cart.totals(), before);
        assert!(cart.take_notices().is_empty());

        assert!(cart.remove_item(&key("42", "Black")).unwrap());
        assert!(cart.is_empty());
        assert_eq!(cart.take_notices()[0].title, "Item removed");
    }

    #[test]
    fn test_promo_apply_and_remove() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 3, "42", &black()).unwrap();

        assert!(cart.apply_promo("save10"));
        assert_eq!(cart.promo().unwrap().code, "SAVE10");
        assert_eq!(cart.totals().discount_amount, Money::naira(1_500));
        assert_eq!(cart.totals().total, Money::naira(14_500));

        cart.add_item(&slide(), 1, "42", &black()).unwrap();
        assert_eq!(cart.totals().discount_amount, Money::naira(2_000));

        cart.remove_promo();
        assert!(cart.promo().is_none());
        assert!(cart.totals().discount_amount.is_zero());
    }

    #[test]
    fn test_invalid_promo_changes_nothing() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 1, "42", &black()).unwrap();
        assert!(cart.apply_promo("SAVE10"));
        cart.take_notices();
        let before = *cart.totals();

        assert!(!cart.apply_promo("BOGUS"));
        assert!(!cart.apply_promo("   "));
        assert_eq!(*cart.totals(), before);
        assert_eq!(cart.promo().unwrap().discount_percent, 10);

        let notices = cart.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Destructive));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 2, "42", &black()).unwrap();
        cart.apply_promo("SAVE10");
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.promo().is_none());
        assert!(cart.totals().subtotal.is_zero());
        assert!(cart.totals().discount_amount.is_zero());
        assert!(cart.totals().delivery_fee.is_zero());
        assert_eq!(cart.delivery_message(), "Free Shipping");
    }

    #[test]
    fn test_lines_persist_but_promo_does_not() {
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(&slide(), 2, "42", &black()).unwrap();
        cart.apply_promo("SAVE10");

        let restored = Cart::restore(cart.into_cache());
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines()[0].quantity, 2);
        assert!(restored.promo().is_none());
        assert_eq!(restored.totals().subtotal, Money::naira(10_000));
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let cache = Cache::memory();
        cache.set(CART_STORAGE_KEY, &serde_json::json!({ "not": "a list" })).unwrap();
        let cart = Cart::restore(cache);
        assert!(cart.is_empty());
        assert!(cart.totals().total.is_zero());
    }

    #[test]
    fn test_custom_policy() {
        let policy = DeliveryFeePolicy::new(
            Money::naira(20_000),
            Money::naira(500),
            Money::naira(2_000),
            2,
        )
        .unwrap();
        let mut cart = Cart::new(Cache::memory()).with_policy(policy).unwrap();
        cart.add_item(&slide(), 1, "42", &black()).unwrap();
        assert_eq!(cart.delivery_message(), "\u{20a6}500 (Less than 2 items)");
        cart.add_item(&slide(), 3, "42", &black()).unwrap();
        assert_eq!(cart.delivery_message(), "Free Shipping");
    }
}
