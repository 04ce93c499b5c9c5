use anyhow::Result;
use clap::{Parser, Subcommand};

/// healthscan - personal health tracking backend
#[derive(Parser)]
#[command(name = "healthscan")]
#[command(about = "Diet plans and product risk checks for health profiles", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = healthscan::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    healthscan::observability::init_observability(
        "healthscan",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => healthscan::cli::serve(config, host, port).await,
        Commands::Migrate => healthscan::cli::migrate(config).await,
    }
}
