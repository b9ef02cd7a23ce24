//! # lunchtray
//!
//! Command-line front end for lunchtray-core.
//!
//! ```text
//! lunchtray menu [--category side]
//! lunchtray order --entree cauliflower --side soup --accompaniment bread [--json]
//! ```
//!
//! Logs go to stderr; the menu, the summary and the JSON go to stdout.

mod config;
mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lunchtray_core::{Category, InMemoryCatalog, MenuCatalog, OrderState, OrderSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "lunchtray")]
#[command(about = "Build a lunch tray order and print its totals", long_about = None)]
struct Cli {
    /// Tax rate in basis points (overrides LUNCHTRAY_TAX_RATE_BPS)
    #[arg(long, global = true)]
    tax_rate_bps: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu
    Menu {
        /// Only show one category (entree, side, accompaniment)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Select items and print the order totals
    Order {
        /// Entree item key
        #[arg(long)]
        entree: Option<String>,

        /// Side item key
        #[arg(long)]
        side: Option<String>,

        /// Accompaniment item key
        #[arg(long)]
        accompaniment: Option<String>,

        /// Print the order summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?.with_tax_rate_bps(cli.tax_rate_bps)?;
    init_tracing(&config.log_filter);
    info!(tax_rate_bps = config.tax_rate_bps, "configuration loaded");

    let menu = InMemoryCatalog::lunch_tray();

    match cli.cmd {
        Commands::Menu { category } => {
            let items = match category {
                Some(category) => menu.items_in(category),
                None => menu.entries(),
            };
            print!("{}", display::render_menu(items, &config.currency_symbol));
        }

        Commands::Order {
            entree,
            side,
            accompaniment,
            json,
        } => {
            let mut order = OrderState::new(&menu, config.order_config());
            order.subscribe(|summary: &OrderSummary| {
                info!(
                    subtotal = %summary.subtotal,
                    tax = %summary.tax,
                    total = %summary.total,
                    "order updated"
                );
            });

            let selections = [
                (Category::Entree, entree),
                (Category::Side, side),
                (Category::Accompaniment, accompaniment),
            ];
            for (category, key) in selections {
                if let Some(key) = key {
                    order
                        .set_category(category, &key)
                        .with_context(|| format!("cannot set {category} to '{key}'"))?;
                }
            }

            let summary = order.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!(
                    "{}",
                    display::render_summary(&summary, order.tax_rate(), &config.currency_symbol)
                );
            }
        }
    }

    Ok(())
}

/// Installs the fmt subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `LUNCHTRAY_LOG` when both are set.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
