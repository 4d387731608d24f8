use anyhow::Result;
use clap::Args;
use oda_ft_api::Client;

use super::build_filter;

#[derive(Args)]
pub struct UrlArgs {
    /// Resource (table) name, e.g. Periode, Sag, Aktør
    pub resource: String,

    /// Filter clause, repeatable: date:<column>:<op>:<YYYY[-MM[-DD]]> or
    /// search:<column>:<term>[:exact]
    #[arg(long = "filter")]
    pub filters: Vec<String>,
}

pub fn run(args: &UrlArgs, client: &Client) -> Result<()> {
    println!("{}", render_url(args, client)?);
    Ok(())
}

fn render_url(args: &UrlArgs, client: &Client) -> Result<String> {
    let filter = build_filter(&args.filters)?;
    Ok(client.build_url(&args.resource, Some(filter.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(resource: &str, filters: &[&str]) -> UrlArgs {
        UrlArgs {
            resource: resource.to_string(),
            filters: filters.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_url_without_filters() {
        let url = render_url(&args("Periode", &[]), &Client::new()).unwrap();
        assert_eq!(url, "https://oda.ft.dk/api/Periode?$inlinecount=allpages");
    }

    #[test]
    fn test_render_url_with_filters() {
        let client = Client::with_base_url("http://localhost:8080");
        let url = render_url(
            &args("Sag", &["date:opdateringsdato:ge:2020-06", "search:titel:finanslov:exact"]),
            &client,
        )
        .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/api/Sag?$inlinecount=allpages&$filter=year(opdateringsdato)%20ge%202020%20and%20month(opdateringsdato)%20ge%206%20and%20titel%20eq%20%27finanslov%27"
        );
    }

    #[test]
    fn test_render_url_rejects_bad_filter() {
        let err = render_url(&args("Sag", &["date:dato:around:2020"]), &Client::new()).unwrap_err();
        assert!(err.to_string().contains("equality denoter"));
    }
}
