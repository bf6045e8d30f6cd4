//! Catalog browsing.

use anyhow::{Context as _, Result};
use shfeet_commerce::catalog::Product;
use shfeet_commerce::search::{PriceRange, ProductFilter, SearchQuery, SortOption};
use shfeet_commerce::Money;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{stock_badge, truncate};

const WIDTHS: [usize; 5] = [4, 30, 12, 12, 12];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List {
            category,
            types,
            search,
            min_price,
            max_price,
            in_stock,
            sort,
            page,
            per_page,
        } => {
            let mut filter = ProductFilter::from_query(category.as_deref(), None)?;
            for kind in &types {
                filter.categories.push(kind.parse()?);
            }
            if min_price.is_some() || max_price.is_some() {
                let range = PriceRange::new(
                    Money::naira(min_price.unwrap_or(0)),
                    Money::naira(max_price.unwrap_or(i64::MAX / 100)),
                )?;
                filter = filter.with_price_range(range);
            }
            let query = SearchQuery::new()
                .with_text(search.unwrap_or_default())
                .with_filter(filter.in_stock_only(in_stock))
                .with_sort(sort.parse::<SortOption>()?)
                .with_pagination(page, per_page);
            list(&query, ctx)
        }
        ProductsCommand::Show { id } => show(&id, ctx),
        ProductsCommand::Related { id } => {
            let product = find(&id, ctx)?;
            let related = ctx.catalog.related(product);
            print_products(&format!("More {}", product.category.display_name()), &related, ctx);
            Ok(())
        }
        ProductsCommand::BestSellers { limit } => {
            print_products("Best Sellers", &ctx.catalog.best_sellers(limit), ctx);
            Ok(())
        }
        ProductsCommand::Featured { limit } => {
            print_products("Featured", &ctx.catalog.featured(limit), ctx);
            Ok(())
        }
    }
}

fn list(query: &SearchQuery, ctx: &Context) -> Result<()> {
    let results = query.run(ctx.catalog.all());

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    print_products(query.sort.display_name(), &results.items, ctx);
    ctx.output.info("");
    ctx.output.info(&results.summary());
    if results.pagination.total_pages > 1 {
        ctx.output.info(&format!(
            "Page {} of {}",
            results.pagination.page, results.pagination.total_pages
        ));
    }
    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let product = find(id, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Type", product.category.display_name());
    ctx.output.kv("For", product.for_whom.display_name());
    ctx.output.kv("Stock", &stock_badge(product.in_stock));
    ctx.output.kv("Sizes", &product.sizes.join(", "));
    let colors: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
    ctx.output.kv("Colours", &colors.join(", "));
    if let Some(rating) = product.average_rating() {
        ctx.output.kv("Rating", &format!("{:.1} / 5", rating));
    }
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    if !product.reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in &product.reviews {
            ctx.output.list_item(&format!(
                "{} ({}★, {}): {}",
                review.user_name, review.rating, review.date, review.comment
            ));
        }
    }
    Ok(())
}

fn find<'a>(id: &str, ctx: &'a Context) -> Result<&'a Product> {
    ctx.catalog
        .find(id)
        .with_context(|| format!("Product not found: {}", id))
}

fn print_products(title: &str, products: &[&Product], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header(title);
    if products.is_empty() {
        ctx.output.info("No products found");
        return;
    }
    ctx.output
        .table_row(&["ID", "Name", "Price", "Type", "Stock"], &WIDTHS);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &truncate(&product.name, WIDTHS[1]),
                &product.price.display(),
                product.category.as_str(),
                if product.in_stock { "yes" } else { "no" },
            ],
            &WIDTHS,
        );
    }
}
