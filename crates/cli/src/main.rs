//! Fairway CLI - browse catalogs, quote carts and check out.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! fairway catalog menu --category drinks
//!
//! # Price a cart and hand it off to checkout
//! fairway quote menu coca-cola=2 lemonade
//!
//! # Review and place the order
//! fairway checkout show --source menu --fulfillment delivery
//! fairway checkout place --source menu --fulfillment delivery
//! ```
//!
//! # Commands
//!
//! - `catalog` - List a shop's items
//! - `quote` - Price a cart and write the checkout hand-off
//! - `checkout show` - Show the pending order with service fee
//! - `checkout place` - Place the pending order and clear the hand-off

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use fairway_cli::CliConfig;
use fairway_cli::commands::{self, quote::LineArg};
use fairway_core::{Category, Fulfillment, Shop};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "fairway")]
#[command(author, version, about = "Fairway clubhouse ordering tools")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items a shop sells
    Catalog {
        /// Shop to list (`menu`, `pro-shop`)
        shop: Shop,

        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Price a cart and hand it off to checkout
    Quote {
        /// Shop the cart belongs to (`menu`, `pro-shop`)
        shop: Shop,

        /// Items as `id` or `id=quantity`
        #[arg(required = true)]
        items: Vec<LineArg>,
    },
    /// Review or place the handed-off order
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show the pending order
    Show(CheckoutArgs),
    /// Place the pending order
    Place {
        #[command(flatten)]
        args: CheckoutArgs,

        /// Delivery or pickup note
        #[arg(short, long)]
        note: Option<String>,
    },
}

#[derive(Args)]
struct CheckoutArgs {
    /// Shop the order was quoted from
    #[arg(short, long, default_value = "menu")]
    source: Shop,

    /// `pickup` or `delivery`
    #[arg(short, long, default_value = "pickup")]
    fulfillment: Fulfillment,
}

fn main() {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fairway_cli=info,fairway_core=info".into());
    let json_layer = cli
        .json_logs
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!cli.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Catalog { shop, category } => {
            commands::catalog::list(&config, shop, category)?;
        }
        Commands::Quote { shop, items } => {
            commands::quote::run(&config, shop, &items)?;
        }
        Commands::Checkout { action } => match action {
            CheckoutAction::Show(args) => {
                let checkout = commands::checkout::show(&config, args.source, args.fulfillment);
                if checkout.handoff().is_empty() {
                    tracing::info!("Nothing to check out yet; run `fairway quote` first");
                }
            }
            CheckoutAction::Place { args, note } => {
                commands::checkout::place(&config, args.source, args.fulfillment, note)?;
            }
        },
    }
    Ok(())
}
