use anyhow::{Context, Result};
use clap::Args;
use oda_ft_api::Client;

use super::build_filter;
use crate::output::{print_json, print_records_markdown, print_records_table, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    /// Resource (table) name, e.g. Periode, Sag, Aktør
    pub resource: String,

    /// Filter clause, repeatable: date:<column>:<op>:<YYYY[-MM[-DD]]> or
    /// search:<column>:<term>[:exact]
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Comma-separated columns to show in table output (default: all)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Show at most this many records
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &FetchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filter = build_filter(&args.filters)?;
    let url = client.build_url(&args.resource, Some(filter.as_str()));

    let mut records = client
        .fetch(&url)
        .await
        .with_context(|| format!("fetching {}", url))?;

    eprintln!("{} records from {}", records.len(), args.resource);
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    match format {
        OutputFormat::Table => print_records_table(&records, &args.columns),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Markdown => print_records_markdown(&records, &args.columns),
    }

    Ok(())
}
