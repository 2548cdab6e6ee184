//! Output formatting for the shell.

use console::{style, Term};
use smartone_core::cart::CartPricing;
use smartone_core::catalog::{Product, MAX_RATING};

/// Output handler for shell messages and views.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", pad_columns(cols, widths));
    }

    /// Print the product grid as a table.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            self.json(&products);
            return;
        }
        if products.is_empty() {
            self.info("No products found");
            self.info("Try adjusting your search or category filter.");
            return;
        }

        let widths = [28, 11, 9, 7, 3];
        for product in products {
            let price = product.price.display();
            let rating = stars(product.stars());
            let badge = if product.is_new { "NEW" } else { "" };
            self.table_row(
                &[
                    product.name.as_str(),
                    product.category.as_str(),
                    price.as_str(),
                    rating.as_str(),
                    badge,
                ],
                &widths,
            );
            if self.verbose && !product.description.is_empty() {
                println!("    {}", style(&product.description).dim());
            }
        }
    }

    /// Print the cart drawer.
    pub fn cart(&self, pricing: &CartPricing) {
        if self.json {
            self.json(pricing);
            return;
        }

        self.header(&format!("Your Cart ({})", pricing.item_count));
        if pricing.is_empty() {
            self.info("Cart is empty");
            self.info("Looks like you haven't added anything yet.");
            return;
        }

        let widths = [28, 9, 5, 10];
        for line in &pricing.lines {
            let unit = line.unit_price.display();
            let quantity = format!("x{}", line.quantity);
            let total = line.line_total.display();
            self.table_row(
                &[line.name.as_str(), unit.as_str(), quantity.as_str(), total.as_str()],
                &widths,
            );
        }
        println!();
        self.kv("Subtotal", &pricing.grand_total.display());
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Clear the screen between interactive renders.
    pub fn clear(&self) {
        if self.json || !self.term.is_term() {
            return;
        }
        let _ = self.term.clear_screen();
    }
}

/// Left-align each column to its width.
pub fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Filled and empty stars for a whole-star rating.
pub fn stars(filled: u8) -> String {
    let max = MAX_RATING as usize;
    let filled = usize::from(filled).min(max);
    format!("{}{}", "★".repeat(filled), "☆".repeat(max - filled))
}
