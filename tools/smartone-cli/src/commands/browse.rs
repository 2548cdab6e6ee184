//! Catalog browsing.

use anyhow::Result;
use smartone_core::catalog::{Catalog, CategoryFilter};

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let filter = CategoryFilter::parse(&args.category);
    if let CategoryFilter::Unknown(name) = &filter {
        ctx.output.warn(&format!("Unknown category '{}'", name));
    }

    let products = catalog.filter(&filter, &args.search);
    ctx.output.debug(&format!(
        "{} of {} products match",
        products.len(),
        catalog.len()
    ));

    ctx.output
        .header(&format!("{} / {}", ctx.config.store.name, filter));
    if !ctx.output.is_json() {
        println!("  {}", category_bar(&catalog, &filter));
        println!();
    }
    ctx.output.products(&products);

    Ok(())
}

/// One line listing each category with its product count, active one bracketed.
pub fn category_bar(catalog: &Catalog, active: &CategoryFilter) -> String {
    let mut entries = vec![(CategoryFilter::All, catalog.len())];
    entries.extend(
        catalog
            .category_counts()
            .into_iter()
            .map(|(category, count)| (CategoryFilter::Only(category), count)),
    );

    entries
        .into_iter()
        .map(|(filter, count)| {
            if &filter == active {
                format!("[{} ({})]", filter, count)
            } else {
                format!("{} ({})", filter, count)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
