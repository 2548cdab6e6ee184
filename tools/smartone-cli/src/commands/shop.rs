//! Shopping session: interactive menu or scripted actions.

use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use smartone_core::catalog::{CategoryFilter, Product};
use smartone_core::events::CartEvent;
use smartone_core::search::Selection;
use smartone_core::{ProductId, Storefront};

use super::browse::category_bar;
use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let (mut store, logger) = ctx.open_storefront()?;
    logger.info_builder("session started")
        .field_u64("products", store.catalog().len() as u64)
        .emit();

    let result = match args.script {
        Some(script) => run_script(&script, &mut store, ctx),
        None => run_interactive(&mut store, ctx),
    };

    logger.info_builder("session ended")
        .field_u64("cart_count", store.cart_count())
        .field_i64("cart_total_cents", store.cart_total().cents())
        .emit();
    result
}

/// One cart action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    Add(ProductId),
    Adjust(ProductId, i64),
    Remove(ProductId),
}

impl FromStr for ShopAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let verb = parts.next().unwrap_or_default();
        let id = parts
            .next()
            .filter(|id| !id.is_empty())
            .map(ProductId::new)
            .ok_or_else(|| anyhow!("Missing product id in '{}'", s))?;
        let extra = parts.next();

        let action = match (verb, extra) {
            ("add", None) => ShopAction::Add(id),
            ("inc", None) => ShopAction::Adjust(id, 1),
            ("dec", None) => ShopAction::Adjust(id, -1),
            ("qty", Some(delta)) => ShopAction::Adjust(
                id,
                delta
                    .parse()
                    .with_context(|| format!("Invalid quantity delta in '{}'", s))?,
            ),
            ("remove" | "rm", None) => ShopAction::Remove(id),
            _ => bail!("Unknown action '{}'", s),
        };

        if parts.next().is_some() {
            bail!("Unexpected trailing input in '{}'", s);
        }
        Ok(action)
    }
}

/// Parse a script of comma- or whitespace-separated actions.
pub fn parse_script(script: &str) -> Result<Vec<ShopAction>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Apply one action. Unknown cart lines are a no-op; unknown catalog ids are an error.
pub fn apply(store: &mut Storefront, action: &ShopAction) -> Result<Option<CartEvent>> {
    match action {
        ShopAction::Add(id) => Ok(Some(store.add_to_cart_by_id(id)?)),
        ShopAction::Adjust(id, delta) => Ok(store.update_quantity(id, *delta)),
        ShopAction::Remove(id) => Ok(store.remove_from_cart(id)),
    }
}

/// Why an action left the cart as it was.
pub fn unchanged_reason(store: &Storefront, action: &ShopAction) -> String {
    let id = match action {
        ShopAction::Add(id) | ShopAction::Adjust(id, _) | ShopAction::Remove(id) => id,
    };
    match (action, store.cart().get(id)) {
        (ShopAction::Adjust(_, delta), Some(item)) => format!(
            "'{}' stays at quantity {} (change {:+})",
            id,
            item.quantity(),
            delta
        ),
        _ => format!("'{}' is not in the cart", id),
    }
}

fn run_script(script: &str, store: &mut Storefront, ctx: &Context) -> Result<()> {
    let actions = parse_script(script)?;
    for action in &actions {
        match apply(store, action)? {
            Some(event) => ctx.output.debug(&format!("{:?}", event)),
            None => ctx.output.warn(&unchanged_reason(store, action)),
        }
    }

    ctx.output.cart(&store.cart_pricing());
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Category,
    Search,
    Add,
    ViewCart,
    Increase,
    Decrease,
    Remove,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 8] = [
        MenuItem::Add,
        MenuItem::Category,
        MenuItem::Search,
        MenuItem::ViewCart,
        MenuItem::Increase,
        MenuItem::Decrease,
        MenuItem::Remove,
        MenuItem::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuItem::Category => "Choose category",
            MenuItem::Search => "Search accessories",
            MenuItem::Add => "Add to cart",
            MenuItem::ViewCart => "View cart",
            MenuItem::Increase => "Increase quantity",
            MenuItem::Decrease => "Decrease quantity",
            MenuItem::Remove => "Remove item",
            MenuItem::Quit => "Quit",
        }
    }
}

fn run_interactive(store: &mut Storefront, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive shop needs a terminal; use --script with --json");
    }

    // The drawer is shell state; the core only says when it should open.
    let drawer = Rc::new(Cell::new(false));
    let opener = Rc::clone(&drawer);
    store.subscribe(move |event: &CartEvent| {
        if event.opens_cart() {
            opener.set(true);
        }
    });

    let theme = ColorfulTheme::default();
    let mut selection = Selection::new();

    loop {
        let visible: Vec<Product> = store.select(&selection).into_iter().cloned().collect();

        ctx.output.clear();
        ctx.output.header(&ctx.config.store.name);
        println!("  {}", category_bar(store.catalog(), &selection.category));
        if !selection.query.is_empty() {
            ctx.output.kv("Search", &selection.query);
        }
        println!();
        ctx.output.products(&visible.iter().collect::<Vec<_>>());

        if drawer.replace(false) {
            ctx.output.cart(&store.cart_pricing());
        }

        let labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
        let prompt = format!(
            "Cart: {} item(s), {}",
            store.cart_count(),
            store.cart_total()
        );
        let choice = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuItem::ALL[choice] {
            MenuItem::Category => {
                let choices = CategoryFilter::choices();
                let names: Vec<&str> = choices.iter().map(CategoryFilter::label).collect();
                let current = choices
                    .iter()
                    .position(|c| *c == selection.category)
                    .unwrap_or(0);
                let picked = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&names)
                    .default(current)
                    .interact()?;
                selection.set_category(choices[picked].clone());
            }
            MenuItem::Search => {
                let query: String = Input::with_theme(&theme)
                    .with_prompt("Search accessories")
                    .with_initial_text(selection.query.clone())
                    .allow_empty(true)
                    .interact_text()?;
                selection.set_query(query.trim());
            }
            MenuItem::Add => {
                if visible.is_empty() {
                    ctx.output.warn("No products to add with the current filter");
                    continue;
                }
                let names: Vec<String> = visible
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.price))
                    .collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Add which product?")
                    .items(&names)
                    .default(0)
                    .interact()?;
                store.add_to_cart(&visible[picked]);
            }
            MenuItem::ViewCart => drawer.set(true),
            MenuItem::Increase => adjust_line(store, &theme, 1)?,
            MenuItem::Decrease => adjust_line(store, &theme, -1)?,
            MenuItem::Remove => {
                if let Some(id) = pick_line(store, &theme, "Remove which item?")? {
                    store.remove_from_cart(&id);
                }
                drawer.set(true);
            }
            MenuItem::Quit => break,
        }
    }

    ctx.output.cart(&store.cart_pricing());
    Ok(())
}

fn adjust_line(store: &mut Storefront, theme: &ColorfulTheme, delta: i64) -> Result<()> {
    let prompt = if delta > 0 { "Increase which item?" } else { "Decrease which item?" };
    if let Some(id) = pick_line(store, theme, prompt)? {
        store.update_quantity(&id, delta);
    }
    Ok(())
}

/// Let the user pick a cart line. `None` when the cart is empty.
fn pick_line(store: &Storefront, theme: &ColorfulTheme, prompt: &str) -> Result<Option<ProductId>> {
    let items = store.cart_items();
    if items.is_empty() {
        return Ok(None);
    }

    let names: Vec<String> = items
        .iter()
        .map(|i| format!("{} x{}", i.product().name, i.quantity()))
        .collect();
    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact()?;
    Ok(Some(items[picked].id().clone()))
}
