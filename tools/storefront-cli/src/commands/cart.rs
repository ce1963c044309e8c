//! Cart commands.

use anyhow::Result;
use storefront_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let app = ctx.storefront();

    let cart = match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => app.cart.fetch().await,
        CartCommand::Add { product, quantity } => {
            app.cart.add_item(&ProductId::new(product), quantity).await
        }
        CartCommand::Update { item, quantity } => {
            app.cart
                .update_quantity(&CartItemId::new(item), quantity)
                .await
        }
        CartCommand::Remove { item } => app.cart.remove_item(&CartItemId::new(item)).await,
        CartCommand::Clear => {
            app.cart
                .clear()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            ctx.output.success("Cart cleared");
            return Ok(());
        }
    }
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    show(&cart, ctx)
}

fn show(cart: &Cart, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output
        .table_row(&["ITEM", "PRODUCT", "QTY", "UNIT", "LINE"], &[10, 30, 4, 12, 12]);
    for item in &cart.items {
        let line = item
            .line_total()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.product_name,
                &item.quantity.to_string(),
                &item.unit_price.display(),
                &line.display(),
            ],
            &[10, 30, 4, 12, 12],
        );
    }

    let subtotal = cart
        .subtotal()
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    ctx.output.kv("Subtotal", &subtotal.display());
    ctx.output.kv(
        "Shipping",
        &Money::vnd(SHIPPING_FEE).display(),
    );
    Ok(())
}
