//! Checkout flow state machine.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{
    OrderLogger, OrderSnapshot, PaymentGateway, PaymentOutcome, PaymentRequest, ShippingAddress,
};
use crate::ids::OrderId;
use crate::notice::Notice;
use crate::CommerceError;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Contact and delivery details.
    Shipping,
    /// Waiting on the payment gateway.
    Payment,
    /// Paid and logged.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// What a payment attempt led to.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutResult {
    Paid(OrderSnapshot),
    Cancelled,
    Failed(String),
}

/// Checkout flow state.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    public_key: String,
    shipping_address: Option<ShippingAddress>,
    payment: Option<PaymentRequest>,
    order: Option<OrderSnapshot>,
}

impl CheckoutFlow {
    /// Start a checkout that will charge through the given gateway key.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            step: CheckoutStep::Shipping,
            public_key: public_key.into(),
            shipping_address: None,
            payment: None,
            order: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping_address(&self) -> Option<&ShippingAddress> {
        self.shipping_address.as_ref()
    }

    pub fn payment_request(&self) -> Option<&PaymentRequest> {
        self.payment.as_ref()
    }

    /// The paid order, once complete.
    pub fn order(&self) -> Option<&OrderSnapshot> {
        self.order.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// Set the shipping address.
    pub fn set_shipping_address(&mut self, address: ShippingAddress) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Shipping {
            return Err(self.transition_error(CheckoutStep::Shipping));
        }
        self.shipping_address = Some(address);
        Ok(())
    }

    /// Validate the address and prepare the payment request.
    ///
    /// Missing fields queue a "Missing information" notice on the cart and
    /// keep the flow on the shipping step.
    pub fn proceed_to_payment(&mut self, cart: &mut Cart) -> Result<&PaymentRequest, CommerceError> {
        if self.step != CheckoutStep::Shipping {
            return Err(self.transition_error(CheckoutStep::Payment));
        }
        if cart.item_count() == 0 {
            return Err(CommerceError::EmptyCart);
        }

        let address = match self.shipping_address.as_ref() {
            Some(address) => address.validated(),
            None => Err(CommerceError::CheckoutIncomplete("shipping address".into())),
        };
        let address = match address {
            Ok(address) => address,
            Err(e) => {
                cart.notify(
                    Notice::destructive("Missing information")
                        .with_description("Please fill all required fields"),
                );
                return Err(e);
            }
        };

        let request = PaymentRequest::new(&address.email, cart.totals().total, &self.public_key);
        tracing::info!(
            reference = %request.reference,
            amount_minor = request.amount_minor,
            "payment requested"
        );
        self.shipping_address = Some(address);
        self.step = CheckoutStep::Payment;
        let request = self.payment.insert(request);
        Ok(&*request)
    }

    /// Go back to a previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        match self.step {
            CheckoutStep::Payment => {
                self.payment = None;
                self.step = CheckoutStep::Shipping;
                Ok(self.step)
            }
            _ => Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "previous".to_string(),
            }),
        }
    }

    /// Run the payment and settle the order.
    ///
    /// On success the cart is snapshotted, cleared and the order recorded;
    /// a failure to record is logged and does not undo the sale. On
    /// cancellation or failure the cart is untouched and the flow stays on
    /// the payment step with a fresh reference.
    pub async fn pay(
        &mut self,
        cart: &mut Cart,
        gateway: &dyn PaymentGateway,
        logger: &dyn OrderLogger,
    ) -> Result<CheckoutResult, CommerceError> {
        self.pay_on(cart, gateway, logger, Local::now().date_naive())
            .await
    }

    /// [`pay`](Self::pay) with an explicit order date.
    pub async fn pay_on(
        &mut self,
        cart: &mut Cart,
        gateway: &dyn PaymentGateway,
        logger: &dyn OrderLogger,
        placed_on: NaiveDate,
    ) -> Result<CheckoutResult, CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(self.transition_error(CheckoutStep::Complete));
        }
        if cart.item_count() == 0 {
            return Err(CommerceError::EmptyCart);
        }
        let (Some(request), Some(address)) = (self.payment.as_mut(), self.shipping_address.as_ref())
        else {
            return Err(CommerceError::CheckoutIncomplete("payment request".into()));
        };

        // The cart may have changed since the request was built.
        request.amount_minor = cart.totals().total.amount_minor;
        request.currency = cart.totals().total.currency;

        match gateway.charge(request).await {
            PaymentOutcome::Success { reference } => {
                let snapshot =
                    OrderSnapshot::capture(request.reference.clone(), cart, address.clone(), placed_on);
                tracing::info!(
                    order_id = %snapshot.order_id,
                    gateway_reference = %reference,
                    total_minor = snapshot.total.amount_minor,
                    "payment succeeded"
                );

                cart.notify(
                    Notice::success("Payment Successful!")
                        .with_description("Thank you for your purchase"),
                );
                cart.clear();

                if let Err(e) = logger.record(&snapshot).await {
                    tracing::warn!(order_id = %snapshot.order_id, error = %e, "failed to record order");
                }

                self.step = CheckoutStep::Complete;
                self.order = Some(snapshot.clone());
                Ok(CheckoutResult::Paid(snapshot))
            }
            PaymentOutcome::Cancelled => {
                tracing::info!(reference = %request.reference, "payment cancelled");
                request.reference = OrderId::generate();
                cart.notify(
                    Notice::destructive("Payment Cancelled")
                        .with_description("You canceled the payment process."),
                );
                Ok(CheckoutResult::Cancelled)
            }
            PaymentOutcome::Failed { reason } => {
                tracing::warn!(reference = %request.reference, %reason, "payment failed");
                request.reference = OrderId::generate();
                cart.notify(Notice::destructive("Payment Failed").with_description(reason.clone()));
                Ok(CheckoutResult::Failed(reason))
            }
        }
    }

    fn transition_error(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use shfeet_cache::Cache;

    fn cart_with_slides() -> Cart {
        let catalog = Catalog::storefront();
        let product = catalog.find("1").unwrap();
        let color = product.color("Black").unwrap().clone();
        let mut cart = Cart::new(Cache::memory());
        cart.add_item(product, 3, "42", &color).unwrap();
        cart.take_notices();
        cart
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            email: "ada@example.com".into(),
            full_name: "Ada Obi".into(),
            city: "Ikeja".into(),
            state: "Lagos".into(),
            phone: "08012345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new("pk_test");
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert!(flow.payment_request().is_none());
    }

    #[test]
    fn test_proceed_builds_request() {
        let mut cart = cart_with_slides();
        cart.apply_promo("SAVE10");
        let mut flow = CheckoutFlow::new("pk_test");
        flow.set_shipping_address(address()).unwrap();

        let request = flow.proceed_to_payment(&mut cart).unwrap();
        assert_eq!(request.amount_minor, 1_450_000);
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.public_key, "pk_test");
        assert_eq!(flow.step(), CheckoutStep::Payment);
        assert_eq!(flow.shipping_address().unwrap().state, "lagos");
        assert_eq!(flow.shipping_address().unwrap().country, "Nigeria");
    }

    #[test]
    fn test_missing_information_blocks_payment() {
        let mut cart = cart_with_slides();
        let mut flow = CheckoutFlow::new("pk_test");
        flow.set_shipping_address(ShippingAddress {
            phone: String::new(),
            ..address()
        })
        .unwrap();

        assert!(matches!(
            flow.proceed_to_payment(&mut cart),
            Err(CommerceError::CheckoutIncomplete(_))
        ));
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(cart.take_notices()[0].title, "Missing information");
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let mut cart = Cart::new(Cache::memory());
        let mut flow = CheckoutFlow::new("pk_test");
        flow.set_shipping_address(address()).unwrap();
        assert!(matches!(
            flow.proceed_to_payment(&mut cart),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_go_back() {
        let mut cart = cart_with_slides();
        let mut flow = CheckoutFlow::new("pk_test");
        assert!(flow.go_back().is_err());

        flow.set_shipping_address(address()).unwrap();
        flow.proceed_to_payment(&mut cart).unwrap();
        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Shipping);
        assert!(flow.payment_request().is_none());
    }

    #[test]
    fn test_address_locked_after_shipping_step() {
        let mut cart = cart_with_slides();
        let mut flow = CheckoutFlow::new("pk_test");
        flow.set_shipping_address(address()).unwrap();
        flow.proceed_to_payment(&mut cart).unwrap();
        assert!(matches!(
            flow.set_shipping_address(address()),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }
}
