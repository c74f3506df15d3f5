use serde_json::json;
use shop_cart::{CartItem, SortAlgorithm, SortDirection, SortKey};
use shop_catalog::{ProductId, ProductUpdate};
use std::fmt::{self, Write};

use crate::cli::Command;
use crate::state::AppState;

/// Execute one command and return what should be printed
pub fn run(command: &Command, state: &mut AppState, json: bool) -> anyhow::Result<String> {
    match command {
        Command::Demo => demo(state, json),
        Command::Cart => cart(state, json),
        Command::Catalog { category } => catalog(state, category.as_deref(), json),
        Command::Sort {
            by,
            direction,
            algorithm,
        } => {
            let key = by.unwrap_or(state.sorting.key);
            let direction = direction.unwrap_or(state.sorting.direction);
            let algorithm = algorithm.unwrap_or(state.sorting.algorithm);
            sort(state, key, direction, algorithm, json)
        }
        Command::Edit { id, set } => edit(state, *id, set, json),
    }
}

fn cart(state: &AppState, json: bool) -> anyhow::Result<String> {
    let listing = state.cart.listing()?;
    if json {
        return Ok(serde_json::to_string_pretty(&listing)? + "\n");
    }
    Ok(listing.to_string())
}

fn demo(state: &AppState, json: bool) -> anyhow::Result<String> {
    let key = state.sorting.key;
    let direction = state.sorting.direction;
    let items = state.cart.get_items_for_sorting()?;
    let quick = SortAlgorithm::Quick.sort(&items, key, direction);
    let merge = SortAlgorithm::Merge.sort(&items, key, direction);

    if json {
        let report = json!({
            "cart": state.cart.listing()?,
            "key": key,
            "direction": direction,
            "quick": quick,
            "merge": merge,
        });
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let mut out = cart(state, false)?;
    let runs = [(SortAlgorithm::Quick, &quick), (SortAlgorithm::Merge, &merge)];
    for (algorithm, sorted) in runs {
        out.push('\n');
        out.push_str(&render_sorted(sorted, key, direction, algorithm)?);
    }
    Ok(out)
}

fn sort(
    state: &AppState,
    key: SortKey,
    direction: SortDirection,
    algorithm: SortAlgorithm,
    json: bool,
) -> anyhow::Result<String> {
    let items = state.cart.get_items_for_sorting()?;
    let sorted = algorithm.sort(&items, key, direction);
    tracing::debug!(%key, %direction, %algorithm, items = sorted.len(), "Cart sorted");

    if json {
        return Ok(serde_json::to_string_pretty(&sorted)? + "\n");
    }
    Ok(render_sorted(&sorted, key, direction, algorithm)?)
}

fn render_sorted(
    items: &[CartItem],
    key: SortKey,
    direction: SortDirection,
    algorithm: SortAlgorithm,
) -> Result<String, fmt::Error> {
    let mut out = format!("=== BY {key} ({direction}, {algorithm} sort) ===\n");
    for item in items {
        writeln!(out, "{}", item.line())?;
    }
    Ok(out)
}

fn catalog(state: &AppState, category: Option<&str>, json: bool) -> anyhow::Result<String> {
    let catalog = state.catalog.read();
    let products = match category {
        Some(category) => catalog.get_products_by_category(category),
        None => catalog.get_all_products().iter().collect(),
    };

    if json {
        return Ok(serde_json::to_string_pretty(&products)? + "\n");
    }

    if products.is_empty() {
        return Ok(match category {
            Some(category) => format!("No products in category {category}.\n"),
            None => "The catalog is empty.\n".to_string(),
        });
    }

    let mut out = String::new();
    for product in products {
        writeln!(out, "{}. {}", product.id(), product)?;
    }
    Ok(out)
}

fn edit(
    state: &mut AppState,
    product_id: ProductId,
    assignments: &[(String, String)],
    json: bool,
) -> anyhow::Result<String> {
    let pairs = assignments.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let (update, ignored) = ProductUpdate::from_pairs(pairs)?;
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "Unknown product fields ignored");
    }

    let edit = state.catalog.write().edit_product(product_id, update)?;

    if json {
        let report = json!({
            "product": edit.product,
            "applied": edit.applied,
            "ignored": ignored,
        });
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let mut out = edit.product.details();
    out.push('\n');
    let applied: Vec<&str> = edit.applied.iter().map(|f| f.as_str()).collect();
    let applied = if applied.is_empty() {
        "-".to_string()
    } else {
        applied.join(", ")
    };
    writeln!(out, "Applied: {applied}")?;
    if !ignored.is_empty() {
        writeln!(out, "Ignored: {}", ignored.join(", "))?;
    }
    Ok(out)
}
