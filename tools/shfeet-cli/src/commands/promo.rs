//! Promo code preview.

use anyhow::{bail, Result};

use super::cart::print_cart;
use super::{PromoArgs, PromoCommand};
use crate::context::Context;

/// Run the promo command.
///
/// Promos are not stored with the cart, so this only shows what the code
/// would do. Pass `--promo` to `cart show` or `checkout` to use it.
pub async fn run(args: PromoArgs, ctx: &Context) -> Result<()> {
    match args.command {
        PromoCommand::Apply { code } => {
            let mut cart = ctx.open_cart()?;
            let accepted = cart.apply_promo(&code);
            ctx.output.notices(&cart.take_notices());
            if !accepted {
                bail!("Promo code not applied: {}", code.trim());
            }
            print_cart(&cart, ctx);
            ctx.output.info("");
            ctx.output.info(&format!(
                "Use `shfeet checkout --promo {}` to pay with this discount.",
                code.trim()
            ));
            Ok(())
        }
    }
}
