use clap::{Parser, Subcommand};

mod catalog;

#[derive(Debug, Parser)]
#[command(name = "lodgekit-cli")]
#[command(about = "Hotel catalog reconciliation command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all suppliers, merge, filter, and print the catalog as JSON.
    Catalog {
        /// Comma-separated hotel ids to keep, or "none" for no restriction.
        #[arg(long, default_value = "none")]
        hotels: String,
        /// Comma-separated destination ids to keep, or "none" for no
        /// restriction.
        #[arg(long, default_value = "none")]
        destinations: String,
    },
    /// List the configured suppliers in declared merge order.
    Suppliers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = lodgekit_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog {
            hotels,
            destinations,
        } => catalog::run_catalog_command(&config, &hotels, &destinations).await,
        Commands::Suppliers => catalog::run_suppliers_command(&config),
    }
}
