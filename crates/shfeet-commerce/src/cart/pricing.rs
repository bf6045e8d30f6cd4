//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Subtotal at which delivery becomes free, in Naira.
pub const FREE_DELIVERY_THRESHOLD_NAIRA: i64 = 100_000;
/// Delivery fee for small orders, in Naira.
pub const FEW_ITEMS_FEE_NAIRA: i64 = 1_000;
/// Delivery fee for larger orders, in Naira.
pub const MANY_ITEMS_FEE_NAIRA: i64 = 6_000;
/// Orders with fewer items than this pay the small-order fee.
pub const FEW_ITEMS_LIMIT: u32 = 4;

/// Which delivery charge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryTier {
    Free,
    FewItems,
    ManyItems,
}

/// Step function from (subtotal, item count) to a delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFeePolicy {
    pub free_threshold: Money,
    pub few_items_fee: Money,
    pub many_items_fee: Money,
    pub few_items_limit: u32,
}

impl DeliveryFeePolicy {
    /// Build a policy, rejecting negative amounts and mixed currencies.
    pub fn new(
        free_threshold: Money,
        few_items_fee: Money,
        many_items_fee: Money,
        few_items_limit: u32,
    ) -> Result<Self, CommerceError> {
        for amount in [&few_items_fee, &many_items_fee] {
            if amount.currency != free_threshold.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: free_threshold.currency.to_string(),
                    got: amount.currency.to_string(),
                });
            }
        }
        if [free_threshold, few_items_fee, many_items_fee]
            .iter()
            .any(|m| m.amount_minor < 0)
        {
            return Err(CommerceError::ValidationError(
                "delivery amounts cannot be negative".into(),
            ));
        }
        Ok(Self {
            free_threshold,
            few_items_fee,
            many_items_fee,
            few_items_limit,
        })
    }

    pub fn currency(&self) -> Currency {
        self.free_threshold.currency
    }

    /// Empty carts and carts at or above the threshold ship free.
    pub fn tier(&self, subtotal: &Money, item_count: u32) -> DeliveryTier {
        if item_count == 0 || subtotal.amount_minor >= self.free_threshold.amount_minor {
            DeliveryTier::Free
        } else if item_count < self.few_items_limit {
            DeliveryTier::FewItems
        } else {
            DeliveryTier::ManyItems
        }
    }

    pub fn fee_for(&self, subtotal: &Money, item_count: u32) -> Money {
        match self.tier(subtotal, item_count) {
            DeliveryTier::Free => Money::zero(self.currency()),
            DeliveryTier::FewItems => self.few_items_fee,
            DeliveryTier::ManyItems => self.many_items_fee,
        }
    }

    /// Label for a tier, e.g. "₦1,000 (Less than 4 items)".
    pub fn describe(&self, tier: DeliveryTier) -> String {
        match tier {
            DeliveryTier::Free => "Free Shipping".to_string(),
            DeliveryTier::FewItems => format!(
                "{} (Less than {} items)",
                self.few_items_fee.display(),
                self.few_items_limit
            ),
            DeliveryTier::ManyItems => format!(
                "{} ({}+ items)",
                self.many_items_fee.display(),
                self.few_items_limit
            ),
        }
    }
}

impl Default for DeliveryFeePolicy {
    fn default() -> Self {
        Self {
            free_threshold: Money::naira(FREE_DELIVERY_THRESHOLD_NAIRA),
            few_items_fee: Money::naira(FEW_ITEMS_FEE_NAIRA),
            many_items_fee: Money::naira(MANY_ITEMS_FEE_NAIRA),
            few_items_limit: FEW_ITEMS_LIMIT,
        }
    }
}

/// Everything derived from the cart lines and the active discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of unit price × quantity.
    pub subtotal: Money,
    /// Active promo percentage, 0 when none.
    pub discount_percent: u8,
    pub discount_amount: Money,
    pub delivery_fee: Money,
    pub delivery_tier: DeliveryTier,
    /// subtotal − discount + delivery.
    pub total: Money,
    /// Sum of line quantities.
    pub item_count: u32,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            discount_percent: 0,
            discount_amount: Money::zero(currency),
            delivery_fee: Money::zero(currency),
            delivery_tier: DeliveryTier::Free,
            total: Money::zero(currency),
            item_count: 0,
        }
    }

    /// Check if any discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount_amount.is_positive()
    }
}

/// Recompute every derived value from scratch.
///
/// Pure: the same lines, discount and policy always give the same totals.
pub fn compute_totals(
    lines: &[CartLine],
    discount_percent: u8,
    policy: &DeliveryFeePolicy,
) -> Result<CartTotals, CommerceError> {
    let currency = policy.currency();
    let mut subtotal = Money::zero(currency);
    let mut item_count: u32 = 0;

    for line in lines {
        if line.product.price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.to_string(),
                got: line.product.price.currency.to_string(),
            });
        }
        let line_total = line.line_total()?;
        subtotal = subtotal.try_add(&line_total).ok_or(CommerceError::Overflow)?;
        item_count = item_count
            .checked_add(line.quantity)
            .ok_or(CommerceError::Overflow)?;
    }

    let discount_percent = discount_percent.min(100);
    let discount_amount = subtotal
        .percentage(discount_percent)
        .ok_or(CommerceError::Overflow)?;
    let delivery_tier = policy.tier(&subtotal, item_count);
    let delivery_fee = policy.fee_for(&subtotal, item_count);
    let total = subtotal
        .try_subtract(&discount_amount)
        .and_then(|m| m.try_add(&delivery_fee))
        .ok_or(CommerceError::Overflow)?;

    Ok(CartTotals {
        subtotal,
        discount_percent,
        discount_amount,
        delivery_fee,
        delivery_tier,
        total,
        item_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Audience, Product, ProductCategory, ProductColor};

    fn line(price_naira: i64, quantity: u32) -> CartLine {
        let product = Product::new(
            format!("p{}", price_naira),
            "Test Sandal",
            Money::naira(price_naira),
            ProductCategory::Sandals,
            Audience::Men,
        );
        CartLine::new(product, quantity, "42", ProductColor::new("Black", "#000000"))
    }

    #[test]
    fn test_subtotal_and_total() {
        let policy = DeliveryFeePolicy::default();
        let totals = compute_totals(&[line(5_000, 3)], 10, &policy).unwrap();
        assert_eq!(totals.subtotal, Money::naira(15_000));
        assert_eq!(totals.discount_amount, Money::naira(1_500));
        assert_eq!(totals.delivery_fee, Money::naira(1_000));
        assert_eq!(totals.total, Money::naira(14_500));
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let policy = DeliveryFeePolicy::default();
        let lines = [line(5_000, 2), line(12_000, 1)];
        let first = compute_totals(&lines, 10, &policy).unwrap();
        let second = compute_totals(&lines, 10, &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_delivery_tiers() {
        let policy = DeliveryFeePolicy::default();

        let few = compute_totals(&[line(78_000, 1), line(1_000, 2)], 0, &policy).unwrap();
        assert_eq!(few.subtotal, Money::naira(80_000));
        assert_eq!(few.item_count, 3);
        assert_eq!(few.delivery_tier, DeliveryTier::FewItems);
        assert_eq!(few.delivery_fee, Money::naira(1_000));

        let many = compute_totals(&[line(16_000, 5)], 0, &policy).unwrap();
        assert_eq!(many.subtotal, Money::naira(80_000));
        assert_eq!(many.delivery_tier, DeliveryTier::ManyItems);
        assert_eq!(many.delivery_fee, Money::naira(6_000));
    }

    #[test]
    fn test_free_delivery_at_threshold() {
        let policy = DeliveryFeePolicy::default();
        for lines in [vec![line(100_000, 1)], vec![line(25_000, 4)], vec![line(60_000, 7)]] {
            let totals = compute_totals(&lines, 0, &policy).unwrap();
            assert!(totals.subtotal.amount_minor >= policy.free_threshold.amount_minor);
            assert!(totals.delivery_fee.is_zero());
        }
    }

    #[test]
    fn test_empty_cart_has_no_fee() {
        let totals = compute_totals(&[], 10, &DeliveryFeePolicy::default()).unwrap();
        let expected = CartTotals {
            discount_percent: 10,
            ..CartTotals::empty(Currency::NGN)
        };
        assert_eq!(totals, expected);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut huge = line(1, 1);
        huge.product.price = Money::new(i64::MAX, Currency::NGN);
        huge.quantity = 2;
        assert!(matches!(
            compute_totals(&[huge], 0, &DeliveryFeePolicy::default()),
            Err(CommerceError::Overflow)
        ));
    }

    #[test]
    fn test_policy_labels() {
        let policy = DeliveryFeePolicy::default();
        assert_eq!(policy.describe(DeliveryTier::Free), "Free Shipping");
        assert_eq!(policy.describe(DeliveryTier::FewItems), "\u{20a6}1,000 (Less than 4 items)");
        assert_eq!(policy.describe(DeliveryTier::ManyItems), "\u{20a6}6,000 (4+ items)");
    }

    #[test]
    fn test_policy_rejects_negative_fee() {
        assert!(DeliveryFeePolicy::new(
            Money::naira(100_000),
            Money::naira(-1),
            Money::naira(6_000),
            4
        )
        .is_err());
    }
}
