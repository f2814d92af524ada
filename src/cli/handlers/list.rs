//! Generic list output handler
//!
//! List commands share the same tail: limit, convert to display rows, print.

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;

/// Apply `limit`, convert each item to its display row and print.
///
/// # Example
///
/// ```ignore
/// let saved = ctx.client.list_saved_recipes(user_id).await?;
/// print_list::<SavedRecipe, SavedRecipeDisplay>(saved, limit, ctx.format, "saved recipes")?;
/// ```
pub fn print_list<T, D>(
    items: Vec<T>,
    limit: Option<usize>,
    format: OutputFormat,
    resource_name: &str,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
{
    debug!("Fetched {} {}", items.len(), resource_name);

    let rows: Vec<D> = limit_items(items, limit).into_iter().map(D::from).collect();
    rows.print(format)
}

fn limit_items<T>(items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    }
}
