//! Order history commands.

use anyhow::Result;
use storefront_commerce::format::format_timestamp;
use storefront_commerce::prelude::*;

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(OrdersCommand::List { page: 1 }) {
        OrdersCommand::List { page } => list(page, ctx).await,
        OrdersCommand::Show { id } => show(&id, ctx).await,
        OrdersCommand::Status { id, status } => set_status(&id, &status, ctx).await,
        OrdersCommand::Cancel { id } => cancel(&id, ctx).await,
    }
}

async fn list(page: i64, ctx: &Context) -> Result<()> {
    let app = ctx.storefront();
    let (orders, pagination) = app
        .orders
        .history(page, ctx.config.page_size)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header("Orders");
    ctx.output
        .table_row(&["ID", "DATE", "STATUS", "TOTAL"], &[12, 20, 12, 14]);
    for order in &orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &format_timestamp(order.created_at),
                order.status.display_name(),
                &order.final_amount.display(),
            ],
            &[12, 20, 12, 14],
        );
    }

    if let Some(p) = pagination {
        ctx.output.info(&format!(
            "Page {} of {} ({} orders)",
            p.display_page(),
            p.total_pages,
            p.total_items
        ));
    }
    Ok(())
}

async fn show(id: &str, ctx: &Context) -> Result<()> {
    let app = ctx.storefront();
    let order = app
        .orders
        .detail(&OrderId::new(id))
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.id.as_str()));
    ctx.output.kv("Placed", &format_timestamp(order.created_at));
    ctx.output.kv("Status", order.status.display_name());
    ctx.output.kv("Payment", order.payment_method.as_str());
    ctx.output
        .kv("Ship to", &order.shipping_address.display_line());
    for item in &order.items {
        ctx.output.list_item(&format!(
            "{} x{} @ {}",
            item.product_name,
            item.quantity,
            item.unit_price.display()
        ));
    }
    ctx.output.kv("Subtotal", &order.total_amount.display());
    ctx.output.kv("Discount", &order.discount_amount.display());
    ctx.output.kv("Shipping", &order.shipping_fee.display());
    ctx.output.kv("Total", &order.final_amount.display());
    Ok(())
}

async fn set_status(id: &str, status: &str, ctx: &Context) -> Result<()> {
    let status = OrderStatus::parse(status).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let app = ctx.storefront();
    let order = app
        .orders
        .set_status(&OrderId::new(id), status)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output.success(&format!(
        "Order {} is now {}",
        order.id.as_str(),
        order.status.display_name()
    ));
    Ok(())
}

async fn cancel(id: &str, ctx: &Context) -> Result<()> {
    let app = ctx.storefront();
    let order = app
        .orders
        .cancel(&OrderId::new(id))
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    ctx.output
        .success(&format!("Order {} cancelled", order.id.as_str()));
    Ok(())
}
