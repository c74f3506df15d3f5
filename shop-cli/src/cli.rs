use clap::{Parser, Subcommand};
use shop_cart::{SortAlgorithm, SortDirection, SortKey};
use shop_catalog::ProductId;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shop")]
#[command(about = "In-memory product catalog and shopping cart")]
#[command(version)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding default.toml and friends
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Show the cart, then the cart sorted with both algorithms
    Demo,
    /// Show the cart
    Cart,
    /// List catalog products
    Catalog {
        /// Only products in this category (case-sensitive)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the cart sorted by a product attribute
    Sort {
        /// price, weight, category or name
        #[arg(short, long)]
        by: Option<SortKey>,
        /// asc or desc
        #[arg(short, long)]
        direction: Option<SortDirection>,
        /// quick or merge
        #[arg(short, long)]
        algorithm: Option<SortAlgorithm>,
    },
    /// Edit a catalog product, e.g. `edit 5 --set price=2.5`
    Edit {
        id: ProductId,
        /// field=value; unknown fields are ignored
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected field=value, got {s:?}"))
}
