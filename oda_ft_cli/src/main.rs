mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oda_ft_api::{Client, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "odaft")]
#[command(about = "Query the Danish Parliament's ODA FT API")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API host, without the /api path
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the request URL for a resource and filters
    Url(commands::url::UrlArgs),
    /// Fetch and print the records of a resource
    Fetch(commands::fetch::FetchArgs),
}

/// Used when `RUST_LOG` is unset, empty or unparsable.
const DEFAULT_LOG_DIRECTIVES: &str = "oda_ft_cli=info,oda_ft_api=warn";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_name(&cli.output);
    let client = Client::with_base_url(&cli.base_url);

    match &cli.command {
        Commands::Url(args) => commands::url::run(args, &client)?,
        Commands::Fetch(args) => commands::fetch::run(args, &client, &format).await?,
    }

    Ok(())
}
