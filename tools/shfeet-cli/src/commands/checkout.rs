//! Checkout: shipping details, payment, order confirmation.

use anyhow::{bail, Result};
use async_trait::async_trait;
use dialoguer::{Confirm, Input, Select};
use shfeet_commerce::checkout::{
    CheckoutFlow, CheckoutResult, OrderLogger, OrderSnapshot, PaymentGateway,
    PaymentOutcome, PaymentRequest, ShippingAddress, ABUJA, NIGERIAN_STATES,
};
use shfeet_commerce::CommerceError;
use shfeet_data::StorefrontApi;

use super::cart::print_cart;
use super::CheckoutArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if cart.is_empty() {
        bail!("Your cart is empty");
    }
    if let Some(code) = &args.promo {
        cart.apply_promo(code);
    }
    ctx.output.notices(&cart.take_notices());
    print_cart(&cart, ctx);

    let public_key = ctx.config.payment.public_key.clone();
    if public_key.is_empty() {
        ctx.output.warn(&format!(
            "No payment public key configured; set payment.public_key or {}",
            crate::config::PUBLIC_KEY_ENV
        ));
    }

    ctx.output.header("Shipping Information");
    let interactive = !args.no_input && !ctx.output.is_json();
    let address = collect_address(&args, interactive)?;

    let mut flow = CheckoutFlow::new(public_key);
    flow.set_shipping_address(address)?;
    let proceeded = flow.proceed_to_payment(&mut cart).map(|r| r.amount());
    ctx.output.notices(&cart.take_notices());
    let amount = proceeded?;

    let gateway = TerminalGateway {
        auto_approve: args.yes,
        interactive,
    };
    let logger = ReportingLogger {
        api: ctx.api()?,
        output: ctx.output.clone(),
    };

    ctx.output.debug(&format!("Requesting {}", amount.display()));
    let result = flow.pay(&mut cart, &gateway, &logger).await;
    ctx.output.notices(&cart.take_notices());

    match result? {
        CheckoutResult::Paid(order) => {
            print_confirmation(&order, ctx);
            Ok(())
        }
        CheckoutResult::Cancelled => {
            ctx.output.info("Your cart has been kept. Run checkout again when ready.");
            Ok(())
        }
        CheckoutResult::Failed(reason) => bail!("Payment failed: {}", reason),
    }
}

/// Approves or cancels the charge at the terminal.
struct TerminalGateway {
    auto_approve: bool,
    interactive: bool,
}

#[async_trait]
impl PaymentGateway for TerminalGateway {
    async fn charge(&self, request: &PaymentRequest) -> PaymentOutcome {
        if self.auto_approve {
            return PaymentOutcome::Success {
                reference: request.reference.to_string(),
            };
        }
        if !self.interactive {
            return PaymentOutcome::Cancelled;
        }

        let prompt = format!(
            "Charge {} to {} (ref {})?",
            request.amount().display(),
            request.email,
            request.reference
        );
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(true) => PaymentOutcome::Success {
                reference: request.reference.to_string(),
            },
            Ok(false) => PaymentOutcome::Cancelled,
            Err(e) => PaymentOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Posts the order to the storefront API behind a spinner.
struct ReportingLogger {
    api: StorefrontApi,
    output: Output,
}

#[async_trait]
impl OrderLogger for ReportingLogger {
    async fn record(&self, order: &OrderSnapshot) -> Result<(), CommerceError> {
        let spinner = self.output.spinner("Recording order...");
        let result = self.api.record(order).await;
        spinner.finish_and_clear();
        if result.is_err() {
            self.output
                .warn("Your payment went through but the order could not be recorded.");
        }
        result
    }
}

/// Take each field from its flag, prompting for the ones not given.
fn collect_address(args: &CheckoutArgs, interactive: bool) -> Result<ShippingAddress> {
    let email = field(&args.email, "Email", interactive)?;
    let full_name = field(&args.name, "Full name", interactive)?;
    let state = match &args.state {
        Some(state) => state.trim().to_lowercase(),
        None if interactive => pick_state()?,
        None => String::new(),
    };
    let address = if state == ABUJA {
        field(&args.address, "Street address", interactive)?
    } else {
        args.address.clone().unwrap_or_default()
    };
    let city = field(&args.city, "City", interactive)?;
    let phone = field(&args.phone, "Phone number", interactive)?;

    Ok(ShippingAddress {
        email,
        full_name,
        address,
        city,
        state,
        phone,
        ..Default::default()
    })
}

fn field(given: &Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    if let Some(value) = given {
        return Ok(value.clone());
    }
    if !interactive {
        return Ok(String::new());
    }
    let value: String = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn pick_state() -> Result<String> {
    let labels: Vec<&str> = NIGERIAN_STATES.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt("State")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(NIGERIAN_STATES[index].0.to_string())
}

fn print_confirmation(order: &OrderSnapshot, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    ctx.output.header("Order Confirmed");
    ctx.output.kv("Order", order.order_id.as_str());
    ctx.output.kv("Items", &order.item_count().to_string());
    ctx.output.kv("Total paid", &order.total.display());
    let address = &order.shipping_address;
    ctx.output.kv("Deliver to", &address.full_name);
    ctx.output.kv("Address", &address.one_line());
    ctx.output.kv("Phone", &address.phone);
    ctx.output.kv("Estimated delivery", &order.estimated_delivery.display());
    ctx.output.info("");
    ctx.output.success("Thank you for your purchase!");
}
