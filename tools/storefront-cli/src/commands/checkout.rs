//! Checkout command.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_client::CheckoutOutcome;
use storefront_commerce::prelude::*;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let payment = match args.payment.to_lowercase().as_str() {
        "cod" => PaymentMethod::Cod,
        "gateway" => PaymentMethod::Gateway,
        other => bail!("Unknown payment method: {other} (use cod or gateway)"),
    };

    let app = ctx.storefront();

    let cart = app
        .cart
        .fetch()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    if cart.is_empty() {
        bail!("Your cart is empty");
    }

    let addresses = app
        .account
        .addresses()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let address = addresses
        .into_iter()
        .find(|a| a.id.as_str() == args.address_id)
        .with_context(|| format!("No address with id {}", args.address_id))?;

    let mut draft = CheckoutDraft::new(cart)
        .with_address(address)
        .with_payment(payment);

    if let Some(code) = &args.discount {
        let applied = app
            .checkout
            .apply_discount(code)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        match applied {
            Some(discount) => {
                ctx.output.info(&format!(
                    "Discount {} applied: -{}",
                    discount.code,
                    discount.amount.display()
                ));
                draft = draft.with_discount(discount);
            }
            None => ctx.output.warn("Empty discount code ignored"),
        }
    }

    let totals = draft
        .totals()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    ctx.output.kv("Subtotal", &totals.total_amount.display());
    ctx.output.kv("Discount", &totals.discount_amount.display());
    ctx.output.kv("Shipping", &totals.shipping_fee.display());
    ctx.output.kv("Total", &totals.final_amount.display());

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            ctx.output.info("Checkout aborted.");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let outcome = app.checkout.place_order(&draft).await;
    spinner.finish_and_clear();
    let outcome = outcome.map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match outcome {
        CheckoutOutcome::Placed(order) => {
            if ctx.output.is_json() {
                ctx.output.json(&order);
                return Ok(());
            }
            ctx.output.success(&format!(
                "Order {} placed: {} due on delivery",
                order.id.as_str(),
                order.final_amount.display()
            ));
        }
        CheckoutOutcome::RedirectToGateway { order, payment_url } => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "order": order,
                    "paymentUrl": payment_url,
                }));
                return Ok(());
            }
            ctx.output
                .success(&format!("Order {} created", order.id.as_str()));
            ctx.output
                .info(&format!("Complete payment at: {payment_url}"));
        }
    }
    Ok(())
}
