//! Checkout against fake payment gateways and order logs.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use shfeet_cache::Cache;
use shfeet_commerce::prelude::*;

struct FixedGateway(PaymentOutcome);

#[async_trait]
impl PaymentGateway for FixedGateway {
    async fn charge(&self, _request: &PaymentRequest) -> PaymentOutcome {
        self.0.clone()
    }
}

#[derive(Default)]
struct MemoryLog {
    orders: Mutex<Vec<OrderSnapshot>>,
}

#[async_trait]
impl OrderLogger for MemoryLog {
    async fn record(&self, order: &OrderSnapshot) -> Result<(), CommerceError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }
}

struct BrokenLog;

#[async_trait]
impl OrderLogger for BrokenLog {
    async fn record(&self, _order: &OrderSnapshot) -> Result<(), CommerceError> {
        Err(CommerceError::ApiError("order log unreachable".into()))
    }
}

fn placed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 7).unwrap()
}

fn cart_with_slides() -> Cart {
    let catalog = Catalog::storefront();
    let product = catalog.find("1").unwrap();
    let color = product.validate_selection(Some("42"), Some("Black")).unwrap();
    let mut cart = Cart::new(Cache::memory());
    cart.add_item(product, 3, "42", &color).unwrap();
    cart.apply_promo("SAVE10");
    cart.take_notices();
    cart
}

fn ready_flow(cart: &mut Cart) -> CheckoutFlow {
    let mut flow = CheckoutFlow::new("pk_test_123");
    flow.set_shipping_address(ShippingAddress {
        email: "ada@example.com".into(),
        full_name: "Ada Obi".into(),
        address: "12 Allen Avenue".into(),
        city: "Ikeja".into(),
        state: "lagos".into(),
        phone: "08012345678".into(),
        ..Default::default()
    })
    .unwrap();
    flow.proceed_to_payment(cart).unwrap();
    flow
}

fn success() -> FixedGateway {
    FixedGateway(PaymentOutcome::Success {
        reference: "T123".into(),
    })
}

#[tokio::test]
async fn paid_order_is_logged_and_cart_cleared() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);
    let reference = flow.payment_request().unwrap().reference.clone();
    let log = MemoryLog::default();

    let result = flow
        .pay_on(&mut cart, &success(), &log, placed_on())
        .await
        .unwrap();

    let CheckoutResult::Paid(order) = result else {
        panic!("expected a paid order");
    };
    assert_eq!(order.order_id, reference);
    assert_eq!(order.total, Money::naira(14_500));
    assert_eq!(order.discount, 10);
    assert_eq!(order.promo_code.as_deref(), Some("SAVE10"));
    assert_eq!(order.item_count(), 3);
    assert_eq!(
        order.estimated_delivery.earliest,
        NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
    );
    assert_eq!(
        order.estimated_delivery.latest,
        NaiveDate::from_ymd_opt(2024, 10, 17).unwrap()
    );

    assert!(flow.is_complete());
    assert_eq!(flow.order(), Some(&order));
    assert!(cart.is_empty());
    assert_eq!(log.orders.lock().unwrap().as_slice(), [order]);

    let titles: Vec<String> = cart.take_notices().into_iter().map(|n| n.title).collect();
    assert!(titles.contains(&"Payment Successful!".to_string()));
}

#[tokio::test]
async fn cancelled_payment_keeps_cart() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);
    let first_reference = flow.payment_request().unwrap().reference.clone();
    let log = MemoryLog::default();

    let result = flow
        .pay_on(&mut cart, &FixedGateway(PaymentOutcome::Cancelled), &log, placed_on())
        .await
        .unwrap();

    assert_eq!(result, CheckoutResult::Cancelled);
    assert_eq!(flow.step(), CheckoutStep::Payment);
    assert_eq!(cart.item_count(), 3);
    assert!(log.orders.lock().unwrap().is_empty());
    assert_eq!(cart.take_notices()[0].title, "Payment Cancelled");

    // A retry gets a new reference and can still succeed.
    assert_ne!(flow.payment_request().unwrap().reference, first_reference);
    let retried = flow
        .pay_on(&mut cart, &success(), &log, placed_on())
        .await
        .unwrap();
    assert!(matches!(retried, CheckoutResult::Paid(_)));
    assert_eq!(log.orders.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_payment_reports_reason() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);

    let gateway = FixedGateway(PaymentOutcome::Failed {
        reason: "Card declined".into(),
    });
    let result = flow
        .pay_on(&mut cart, &gateway, &MemoryLog::default(), placed_on())
        .await
        .unwrap();

    assert_eq!(result, CheckoutResult::Failed("Card declined".into()));
    assert!(!cart.is_empty());
    let notice = cart.take_notices().remove(0);
    assert_eq!(notice.title, "Payment Failed");
    assert_eq!(notice.level, NoticeLevel::Destructive);
}

#[tokio::test]
async fn unreachable_order_log_still_completes_sale() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);

    let result = flow
        .pay_on(&mut cart, &success(), &BrokenLog, placed_on())
        .await
        .unwrap();

    assert!(matches!(result, CheckoutResult::Paid(_)));
    assert!(flow.is_complete());
    assert!(cart.is_empty());
}

#[tokio::test]
async fn amount_is_repriced_at_payment_time() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);
    assert_eq!(flow.payment_request().unwrap().amount(), Money::naira(14_500));

    cart.remove_promo();
    let result = flow
        .pay_on(&mut cart, &success(), &MemoryLog::default(), placed_on())
        .await
        .unwrap();

    let CheckoutResult::Paid(order) = result else {
        panic!("expected a paid order");
    };
    assert_eq!(order.total, Money::naira(16_000));
    assert_eq!(flow.payment_request().unwrap().amount(), Money::naira(16_000));
}

#[tokio::test]
async fn paying_twice_is_rejected() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);
    let log = MemoryLog::default();
    flow.pay_on(&mut cart, &success(), &log, placed_on())
        .await
        .unwrap();

    let again = flow.pay_on(&mut cart, &success(), &log, placed_on()).await;
    assert!(matches!(
        again,
        Err(CommerceError::InvalidCheckoutTransition { .. })
    ));
    assert_eq!(log.orders.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn logged_order_uses_whole_naira_numbers() {
    let mut cart = cart_with_slides();
    let mut flow = ready_flow(&mut cart);

    let result = flow
        .pay_on(&mut cart, &success(), &MemoryLog::default(), placed_on())
        .await
        .unwrap();
    let CheckoutResult::Paid(order) = result else {
        panic!("expected a paid order");
    };

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["subtotal"], 15000);
    assert_eq!(json["deliveryFee"], 1000);
    assert_eq!(json["discountAmount"], 1500);
    assert_eq!(json["total"], 14500);
    assert_eq!(json["totalAfterDiscount"], 14500);
    assert_eq!(json["items"][0]["product"]["price"], 5000);
    assert_eq!(json["items"][0]["quantity"], 3);

    let parsed: OrderSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, order);
}
