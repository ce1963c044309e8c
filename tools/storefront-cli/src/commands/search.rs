//! Catalog search command.

use anyhow::{bail, Result};
use storefront_commerce::prelude::*;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let sort = match args.sort.as_str() {
        "newest" => SortKey::Newest,
        "price" => SortKey::Price,
        "name" => SortKey::Name,
        "best-selling" => SortKey::BestSelling,
        other => bail!("Unknown sort key: {other}"),
    };
    let direction = if args.asc {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    let mut query = ProductQuery::new()
        .with_page(args.page)
        .with_size(args.size.unwrap_or(ctx.config.page_size))
        .with_sort(sort, direction)
        .with_price_range(
            args.min_price.map(Money::vnd),
            args.max_price.map(Money::vnd),
        );
    if let Some(term) = &args.term {
        query = query.with_search(term.clone());
    }
    if let Some(category) = &args.category {
        query = query.with_category(CategoryId::new(category.clone()));
    }
    if let Some(brand) = &args.brand {
        query = query.with_brand(BrandId::new(brand.clone()));
    }

    let app = ctx.storefront();
    let spinner = ctx.output.spinner("Searching...");
    let result = app.catalog.search_products(&query).await;
    spinner.finish_and_clear();

    let (products, pagination) = result.map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products matched.");
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "STOCK"], &[12, 36, 14, 6]);
    for product in &products {
        let stock = if product.in_stock() {
            product.stock.to_string()
        } else {
            "out".to_string()
        };
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.price.display(),
                &stock,
            ],
            &[12, 36, 14, 6],
        );
    }

    if let Some(p) = pagination {
        ctx.output.info(&format!(
            "Page {} of {} ({} items)",
            p.display_page(),
            p.total_pages,
            p.total_items
        ));
    }
    Ok(())
}
