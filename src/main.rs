//! Command-line front end for the variant update workflow.
//!
//! - `list` prints the catalog.
//! - `update` selects a variant, edits the given fields, submits and prints the outcome.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, Instrument};
use variant_updater::config::{CatalogSourceKind, Config};
use variant_updater::lifecycle::{setup_tracing, VariantSystem};
use variant_updater::model::{VariantId, VariantRecord};
use variant_updater::workflow::{FormField, RequestStatus};

#[derive(Debug, Parser)]
#[command(name = "variant-updater", version, about = "Update price and stock of product variants")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `api.base_url`
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Load the catalog from the list endpoint instead of the built-in fixture
    #[arg(long, global = true)]
    remote_catalog: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every variant in the catalog
    List,
    /// Edit one variant and submit it
    Update {
        #[arg(long)]
        id: u32,
        /// New price, taken as typed
        #[arg(long)]
        price: Option<String>,
        /// New stock count, taken as typed
        #[arg(long)]
        stock: Option<String>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if cli.remote_catalog {
        config.catalog.source = CatalogSourceKind::Http;
    }
    Ok(config)
}

fn print_catalog(records: &[VariantRecord]) {
    println!("{:<6} {:<8} {:>8} {:>6} {:>5}  DESCRIPTION", "ID", "NAME", "PRICE", "STOCK", "TRAY");
    for r in records {
        println!(
            "{:<6} {:<8} {:>8.2} {:>6} {:>5}  {}",
            r.id, r.name, r.price, r.stock, r.tray_number, r.description
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(base_url = %config.api.base_url, source = ?config.catalog.source, "Starting");

    let system = VariantSystem::from_config(&config)
        .await
        .context("starting variant system")?;

    let outcome = match cli.command {
        Command::List => {
            let records = system.catalog().list_variants().await?;
            print_catalog(&records);
            Ok(())
        }
        Command::Update { id, price, stock } => {
            let workflow = &system.workflow;
            let span = tracing::info_span!("update", variant_id = id);
            let status = async {
                workflow.select(VariantId(id)).await?;
                if let Some(price) = price {
                    workflow.edit_field(FormField::Price, price).await?;
                }
                if let Some(stock) = stock {
                    workflow.edit_field(FormField::Stock, stock).await?;
                }
                if let Some(form) = workflow.form().await {
                    info!(
                        price = form.get(FormField::Price),
                        stock = form.get(FormField::Stock),
                        "Submitting"
                    );
                }
                workflow.submit().await
            }
            .instrument(span)
            .await?;

            match status {
                RequestStatus::Success(message) => {
                    println!("{}", message);
                    let record = system.catalog().get_variant(VariantId(id)).await?;
                    print_catalog(&[record]);
                    Ok(())
                }
                RequestStatus::Error(message) => {
                    error!(%message, "Update failed");
                    Err(anyhow::anyhow!("Error: {}", message))
                }
                other => Err(anyhow::anyhow!("submit ended in unexpected state {:?}", other)),
            }
        }
    };

    system.shutdown().await?;
    outcome
}
