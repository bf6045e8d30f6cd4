//! Cart management.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use shfeet_commerce::cart::{Cart, LineKey};

use super::{CartArgs, CartCommand, LineArgs};
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 6] = [4, 26, 6, 8, 4, 12];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    match args.command {
        CartCommand::Show { promo } => {
            if let Some(code) = promo {
                cart.apply_promo(&code);
            }
            ctx.output.notices(&cart.take_notices());
            print_cart(&cart, ctx);
        }
        CartCommand::Add { line, quantity } => {
            let product = ctx
                .catalog
                .find(&line.id)
                .with_context(|| format!("Product not found: {}", line.id))?;
            let color = product.validate_selection(Some(line.size.as_str()), Some(line.color.as_str()))?;
            cart.add_item(product, quantity, line.size.trim(), &color)?;
            ctx.output.notices(&cart.take_notices());
            print_cart(&cart, ctx);
        }
        CartCommand::Update { line, quantity } => {
            let key = line_key(&line, &cart)?;
            cart.update_quantity(&key, quantity)?;
            ctx.output.success(&format!("Quantity set to {}", quantity));
            print_cart(&cart, ctx);
        }
        CartCommand::Remove { line } => {
            let key = line_key(&line, &cart)?;
            cart.remove_item(&key)?;
            ctx.output.notices(&cart.take_notices());
            print_cart(&cart, ctx);
        }
        CartCommand::Clear { yes } => {
            if cart.is_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Remove all {} items from your cart?", cart.item_count()))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left unchanged");
                    return Ok(());
                }
            }
            cart.clear();
            ctx.output.notices(&cart.take_notices());
        }
    }

    Ok(())
}

/// Find the line the arguments name, matching colour without regard to case.
fn line_key(args: &LineArgs, cart: &Cart) -> Result<LineKey> {
    cart.lines()
        .iter()
        .map(|l| l.key())
        .find(|key| {
            key.product_id.as_str() == args.id.trim()
                && key.size == args.size.trim()
                && key.color_name.eq_ignore_ascii_case(args.color.trim())
        })
        .with_context(|| {
            format!(
                "No cart line for product {} in size {}, {}",
                args.id, args.size, args.color
            )
        })
}

/// Print the lines and the order summary.
pub fn print_cart(cart: &Cart, ctx: &Context) {
    let totals = cart.totals();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.lines(),
            "promo": cart.promo().map(|p| &p.code),
            "totals": totals,
            "deliveryMessage": cart.delivery_message(),
        }));
        return;
    }

    ctx.output.header("Your Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output
        .table_row(&["ID", "Product", "Size", "Colour", "Qty", "Total"], &WIDTHS);
    for line in cart.lines() {
        let line_total = line
            .line_total()
            .map(|m| m.display())
            .unwrap_or_else(|_| "-".to_string());
        ctx.output.table_row(
            &[
                line.product.id.as_str(),
                &truncate(&line.product.name, WIDTHS[1]),
                &line.selected_size,
                &line.selected_color.name,
                &line.quantity.to_string(),
                &line_total,
            ],
            &WIDTHS,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Items", &totals.item_count.to_string());
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if let Some(promo) = cart.promo() {
        ctx.output.kv(
            &format!("Discount ({}, {}%)", promo.code, promo.discount_percent),
            &format!("-{}", totals.discount_amount.display()),
        );
    }
    ctx.output.kv("Delivery", &cart.delivery_message());
    ctx.output.kv("Total", &totals.total.display());
}
