//! Terminal rendering for cart commands.
//!
//! Text mode prints styled lines for people; `--json` mode prints only the
//! cart snapshot (and errors as `{"error": ..}` on stderr) so scripts can
//! read stdout directly.

use console::{pad_str, style, Alignment};
use kitbag_commerce::cart::{Cart, CartItem, CartSnapshot};

/// Cart table columns: title, width, alignment.
const LINE_COLUMNS: [(&str, usize, Alignment); 6] = [
    ("LINE", 22, Alignment::Left),
    ("PRODUCT", 26, Alignment::Left),
    ("SIZE", 8, Alignment::Left),
    ("QTY", 5, Alignment::Right),
    ("UNIT", 10, Alignment::Right),
    ("TOTAL", 11, Alignment::Right),
];

/// Renders command results.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// A change was applied to the cart.
    pub fn changed(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// The command ran but the cart was left as it was.
    pub fn unchanged(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("-").dim(), msg);
        }
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("!").yellow().bold(), msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        }
    }

    /// Print every line of the cart followed by its totals.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            return self.snapshot(cart);
        }
        if cart.is_empty() {
            println!("{}", style("Your cart is empty.").dim());
            return;
        }

        let titles = LINE_COLUMNS.map(|(title, _, _)| title);
        println!("{}", style(table_row(titles)).bold());
        for item in cart.items() {
            println!("{}", line_row(item));
        }
        println!();
        self.totals(cart);
    }

    /// Print the cart totals (the whole snapshot in JSON mode).
    pub fn totals(&self, cart: &Cart) {
        if self.json {
            return self.snapshot(cart);
        }
        println!("  {:<6} {}", style("Items").dim(), cart.item_count());
        println!("  {:<6} {}", style("Total").dim(), style(cart.total().display()).bold());
    }

    fn snapshot(&self, cart: &Cart) {
        match serde_json::to_string_pretty(&CartSnapshot::from(cart)) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("cannot encode cart: {}", e)),
        }
    }
}

fn line_row(item: &CartItem) -> String {
    let quantity = item.quantity.to_string();
    let unit = item.unit_price().display();
    let total = item
        .line_total()
        .map(|m| m.display())
        .unwrap_or_else(|| "overflow".to_string());
    table_row([
        item.id.as_str(),
        item.product.name.as_str(),
        item.variant.size.as_str(),
        quantity.as_str(),
        unit.as_str(),
        total.as_str(),
    ])
}

fn table_row(cells: [&str; 6]) -> String {
    LINE_COLUMNS
        .iter()
        .zip(cells)
        .map(|(&(_, width, align), cell)| pad_str(cell, width, align, Some("…")).into_owned())
        .collect::<Vec<_>>()
        .join("  ")
}
