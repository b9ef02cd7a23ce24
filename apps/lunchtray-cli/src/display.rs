//! # Display
//!
//! Currency formatting and text layout for the terminal.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Entree         Cauliflower        $7.00 │
//! │  Side           Butternut Squash…  $3.00 │
//! │  Accompaniment  -                        │
//! │  ──────────────────────────────────────  │
//! │  Subtotal                         $10.00 │
//! │  Tax (8.00%)                       $0.80 │
//! │  Total                            $10.80 │
//! └──────────────────────────────────────────┘
//! ```

use lunchtray_core::{Category, MenuItem, Money, OrderSummary, TaxRate};

const LABEL_WIDTH: usize = 15;
const NAME_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 10;

/// Formats `amount` as `<symbol><dollars>.<cents>` with thousands separators.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let dollars = group_thousands(amount.dollars().unsigned_abs());
    format!("{sign}{symbol}{dollars}.{:02}", amount.cents_part())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Entree => "Entree",
        Category::Side => "Side",
        Category::Accompaniment => "Accompaniment",
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Renders the menu, grouped by category.
pub fn render_menu<'a, I>(items: I, symbol: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a MenuItem)>,
{
    let items: Vec<(&str, &MenuItem)> = items.into_iter().collect();
    let mut out = String::new();

    for category in Category::ALL {
        let section: Vec<_> = items
            .iter()
            .filter(|(_, item)| item.category == category)
            .collect();
        if section.is_empty() {
            continue;
        }

        out.push_str(category_label(category));
        out.push('\n');
        for (key, item) in section {
            out.push_str(&format!(
                "  {:<12} {:<nw$} {:>aw$}\n",
                key,
                truncate(&item.name, NAME_WIDTH),
                format_currency(item.price, symbol),
                nw = NAME_WIDTH,
                aw = AMOUNT_WIDTH,
            ));
        }
    }

    out
}

/// Renders the selections and totals of an order.
pub fn render_summary(summary: &OrderSummary, rate: TaxRate, symbol: &str) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        let (name, price) = match summary.selection(category) {
            Some(item) => (
                truncate(&item.name, NAME_WIDTH),
                format_currency(item.price, symbol),
            ),
            None => ("-".to_string(), String::new()),
        };
        out.push_str(&format!(
            "{:<lw$}{:<nw$}{:>aw$}\n",
            category_label(category),
            name,
            price,
            lw = LABEL_WIDTH,
            nw = NAME_WIDTH,
            aw = AMOUNT_WIDTH,
        ));
    }

    let width = LABEL_WIDTH + NAME_WIDTH + AMOUNT_WIDTH;
    out.push_str(&"─".repeat(width));
    out.push('\n');

    let tax_label = format!("Tax ({:.2}%)", rate.percentage());
    for (label, amount) in [
        ("Subtotal", summary.subtotal),
        (tax_label.as_str(), summary.tax),
        ("Total", summary.total),
    ] {
        out.push_str(&format!(
            "{:<w$}{:>aw$}\n",
            label,
            format_currency(amount, symbol),
            w = LABEL_WIDTH + NAME_WIDTH,
            aw = AMOUNT_WIDTH,
        ));
    }

    out
}
