use clap::{Args, Parser, Subcommand};
use std::sync::Arc;

use prime_properties::config::AppConfig;
use prime_properties::content::models::{PropertyStatus, PropertyType};
use prime_properties::content::{ContentClient, CosmicGateway};
use prime_properties::error::AppError;
use prime_properties::filter::{FilterCriteria, PropertyFilter};
use prime_properties::server::{self, ServeOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "Prime Properties",
    about = "Serve the Prime Properties marketing site backend or inspect its listing catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the listing catalog, optionally filtered
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Only listings of this type (house, condo, apartment, townhouse)
    #[arg(long, value_parser = parse_property_type)]
    property_type: Option<PropertyType>,
    /// Only listings with this status (for-sale, pending, sold)
    #[arg(long, value_parser = parse_status)]
    status: Option<PropertyStatus>,
    /// Only listings priced at or above this amount
    #[arg(long)]
    min_price: Option<u64>,
    /// Only listings priced at or below this amount
    #[arg(long)]
    max_price: Option<u64>,
    /// Only listings with at least this many bedrooms
    #[arg(long)]
    min_bedrooms: Option<u32>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            server::run(ServeOverrides {
                host: args.host,
                port: args.port,
            })
            .await
        }
        Command::Catalog(args) => run_catalog(args).await,
    }
}

fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    PropertyType::from_key(raw).ok_or_else(|| {
        format!("unknown property type '{raw}' (expected house, condo, apartment, or townhouse)")
    })
}

fn parse_status(raw: &str) -> Result<PropertyStatus, String> {
    PropertyStatus::from_key(raw)
        .ok_or_else(|| format!("unknown status '{raw}' (expected for-sale, pending, or sold)"))
}

async fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gateway = Arc::new(CosmicGateway::new(&config.content));
    let content = ContentClient::new(gateway);

    let properties = content.properties().await?;
    let filter = PropertyFilter::with_criteria(FilterCriteria {
        property_type: args.property_type,
        status: args.status,
        min_price: args.min_price,
        max_price: args.max_price,
        min_bedrooms: args.min_bedrooms,
    });
    let matched = filter.apply(&properties);

    println!("Listing catalog");
    println!("Showing {} of {} properties", matched.len(), properties.len());

    if matched.is_empty() {
        println!("\nNo properties match the given criteria.");
        return Ok(());
    }

    println!();
    for property in matched {
        let meta = &property.metadata;
        println!(
            "- {} | {} | ${} | {} bd / {} ba | {} sqft | {} | {}",
            property.title,
            meta.address,
            meta.price,
            meta.bedrooms,
            meta.bathrooms,
            meta.square_footage,
            meta.property_type.key.label(),
            meta.status.key.label()
        );
    }

    Ok(())
}
