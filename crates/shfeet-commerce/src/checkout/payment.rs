//! Payment hand-off.
//!
//! The store never sees card details. Checkout builds a [`PaymentRequest`]
//! and a [`PaymentGateway`] (a hosted widget in the browser, a prompt in
//! the CLI, a fake in tests) reports how it went.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::money::{Currency, Money};

/// What the gateway is asked to charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// `ORD` plus six digits; also the order id.
    pub reference: OrderId,
    pub email: String,
    /// Amount in minor units (kobo).
    pub amount_minor: i64,
    pub currency: Currency,
    pub public_key: String,
}

impl PaymentRequest {
    /// Request a charge for `total` with a fresh reference.
    pub fn new(email: impl Into<String>, total: Money, public_key: impl Into<String>) -> Self {
        Self {
            reference: OrderId::generate(),
            email: email.into(),
            amount_minor: total.amount_minor,
            currency: total.currency,
            public_key: public_key.into(),
        }
    }

    pub fn amount(&self) -> Money {
        Money::new(self.amount_minor, self.currency)
    }
}

/// How a payment attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentOutcome {
    /// Charged; carries the gateway's reference.
    Success { reference: String },
    /// The shopper closed the payment window.
    Cancelled,
    /// The gateway declined or errored.
    Failed { reason: String },
}

/// Collects payment for a request.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> PaymentOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_amount_in_kobo() {
        let request = PaymentRequest::new("ada@example.com", Money::naira(14_500), "pk_test_x");
        assert_eq!(request.amount_minor, 1_450_000);
        assert_eq!(request.currency, Currency::NGN);
        assert!(request.reference.as_str().starts_with("ORD"));
        assert_eq!(request.amount(), Money::naira(14_500));
    }

    #[test]
    fn test_outcome_serde() {
        let json = serde_json::to_value(PaymentOutcome::Failed {
            reason: "declined".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "declined");
    }
}
