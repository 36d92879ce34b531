//! Custom assertions for corexia list output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a list page contains the expected number of rows.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let items = json["items"]
        .as_array()
        .context("Expected 'items' array in JSON")?;

    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }

    Ok(())
}

/// Assert the page metadata of a list response.
pub fn assert_page(json: &Value, current_page: u64, total_pages: u64, total_items: u64) -> Result<()> {
    let current = json["current_page"].as_u64().context("missing current_page")?;
    let pages = json["total_pages"].as_u64().context("missing total_pages")?;
    let items = json["total_items"].as_u64().context("missing total_items")?;

    if (current, pages, items) != (current_page, total_pages, total_items) {
        anyhow::bail!(
            "Expected page {}/{} of {} items, got {}/{} of {}",
            current_page,
            total_pages,
            total_items,
            current,
            pages,
            items
        );
    }

    Ok(())
}

/// Assert where the data came from ("remote" or "fixture").
pub fn assert_origin(json: &Value, expected: &str) -> Result<()> {
    let origin = json["origin"].as_str().context("missing origin")?;
    if origin != expected {
        anyhow::bail!("Expected origin {}, got {}", expected, origin);
    }
    Ok(())
}

/// Assert a string field of the item at `index`.
pub fn assert_item_field(json: &Value, index: usize, field: &str, expected: &str) -> Result<()> {
    let actual = json["items"][index][field]
        .as_str()
        .with_context(|| format!("item {} missing string field '{}'", index, field))?;

    if actual != expected {
        anyhow::bail!(
            "Expected items[{}].{} = {:?}, got {:?}",
            index,
            field,
            expected,
            actual
        );
    }

    Ok(())
}
