//! Paid-order snapshots and order logging.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use shfeet_data::StorefrontApi;

use crate::cart::{Cart, CartLine};
use crate::checkout::ShippingAddress;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// Days from order to the earliest expected delivery.
pub const EARLIEST_DELIVERY_DAYS: i64 = 7;
/// Days from order to the latest expected delivery.
pub const LATEST_DELIVERY_DAYS: i64 = 10;

/// Expected delivery dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DeliveryWindow {
    pub fn from_order_date(placed_on: NaiveDate) -> Self {
        Self {
            earliest: placed_on + Duration::days(EARLIEST_DELIVERY_DAYS),
            latest: placed_on + Duration::days(LATEST_DELIVERY_DAYS),
        }
    }

    /// e.g. "Monday, 14 October 2024 - Thursday, 17 October 2024".
    pub fn display(&self) -> String {
        const FORMAT: &str = "%A, %-d %B %Y";
        format!(
            "{} - {}",
            self.earliest.format(FORMAT),
            self.latest.format(FORMAT)
        )
    }
}

/// A frozen copy of a paid cart.
///
/// Built once payment succeeds, before the cart is cleared. This is what
/// the confirmation screen shows and what the order log receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub order_id: OrderId,
    pub items: Vec<CartLine>,
    #[serde(with = "crate::money::naira")]
    pub subtotal: Money,
    #[serde(with = "crate::money::naira")]
    pub delivery_fee: Money,
    /// Promo percentage, 0 when none.
    pub discount: u8,
    #[serde(with = "crate::money::naira")]
    pub discount_amount: Money,
    pub promo_code: Option<String>,
    #[serde(with = "crate::money::naira")]
    pub total: Money,
    /// Same as `total`; kept for the order log's field set.
    #[serde(with = "crate::money::naira")]
    pub total_after_discount: Money,
    pub shipping_address: ShippingAddress,
    pub placed_on: NaiveDate,
    pub estimated_delivery: DeliveryWindow,
}

impl OrderSnapshot {
    /// Copy the cart's current lines and totals.
    pub fn capture(
        order_id: OrderId,
        cart: &Cart,
        shipping_address: ShippingAddress,
        placed_on: NaiveDate,
    ) -> Self {
        let totals = cart.totals();
        Self {
            order_id,
            items: cart.lines().to_vec(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            discount: totals.discount_percent,
            discount_amount: totals.discount_amount,
            promo_code: cart.promo().map(|p| p.code.clone()),
            total: totals.total,
            total_after_discount: totals.total,
            shipping_address,
            placed_on,
            estimated_delivery: DeliveryWindow::from_order_date(placed_on),
        }
    }

    /// Total quantity across lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// Somewhere to record paid orders.
#[async_trait]
pub trait OrderLogger: Send + Sync {
    async fn record(&self, order: &OrderSnapshot) -> Result<(), CommerceError>;
}

#[async_trait]
impl OrderLogger for StorefrontApi {
    async fn record(&self, order: &OrderSnapshot) -> Result<(), CommerceError> {
        self.log_order(order).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_window() {
        let placed = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();
        let window = DeliveryWindow::from_order_date(placed);
        assert_eq!(window.earliest, NaiveDate::from_ymd_opt(2024, 10, 14).unwrap());
        assert_eq!(window.latest, NaiveDate::from_ymd_opt(2024, 10, 17).unwrap());
        assert_eq!(
            window.display(),
            "Monday, 14 October 2024 - Thursday, 17 October 2024"
        );
    }

    #[test]
    fn test_window_crosses_month_end() {
        let placed = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let window = DeliveryWindow::from_order_date(placed);
        assert_eq!(window.latest, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
    }
}
