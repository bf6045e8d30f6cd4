//! Checkout module.
//!
//! Contains the checkout flow, shipping address, payment hand-off and
//! paid-order snapshots.

mod address;
mod flow;
mod order;
mod payment;

pub use address::{state_label, ShippingAddress, ABUJA, NIGERIAN_STATES, SHIPPING_COUNTRY};
pub use flow::{CheckoutFlow, CheckoutResult, CheckoutStep};
pub use order::{
    DeliveryWindow, OrderLogger, OrderSnapshot, EARLIEST_DELIVERY_DAYS, LATEST_DELIVERY_DAYS,
};
pub use payment::{PaymentGateway, PaymentOutcome, PaymentRequest};
