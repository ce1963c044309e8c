//! Product detail command.

use anyhow::Result;
use storefront_commerce::format::format_date;
use storefront_commerce::prelude::*;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let app = ctx.storefront();

    let product = if args.slug {
        app.catalog.get_product_by_slug(&args.id).await
    } else {
        app.catalog.get_product(&ProductId::new(args.id.clone())).await
    }
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Status", product.status.as_str());
    ctx.output.kv("Stock", &product.stock.to_string());
    if product.average_rating > 0.0 {
        ctx.output
            .kv("Rating", &format!("{:.1}/5", product.average_rating));
    }
    if let Some(image) = product.primary_image() {
        ctx.output.kv("Image", &image.url);
    }
    if let Some(description) = &product.description {
        ctx.output.kv("Description", description);
    }

    if args.reviews {
        let reviews = app
            .reviews
            .list_for_product(&product.id)
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        if reviews.is_empty() {
            ctx.output.info("No reviews yet.");
        } else {
            ctx.output.header("Reviews");
            for review in &reviews {
                let author = review.author.as_deref().unwrap_or("anonymous");
                ctx.output.list_item(&format!(
                    "{}/5 by {} on {} - {}",
                    review.rating,
                    author,
                    format_date(review.created_at),
                    review.comment
                ));
            }
        }
    }
    Ok(())
}
