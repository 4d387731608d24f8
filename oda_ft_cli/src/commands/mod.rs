//! CLI subcommand implementations.

pub mod fetch;
pub mod url;

use oda_ft_api::Filter;

/// Folds `--filter` specs into one filter, failing on the first bad spec.
pub fn build_filter(specs: &[String]) -> Result<Filter, oda_ft_api::Error> {
    let mut filter = Filter::new();
    for spec in specs {
        filter.add_spec(spec)?;
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        assert!(build_filter(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_build_filter_joins_specs() {
        let specs = vec![
            "date:startdato:ge:2003".to_string(),
            "search:titel:samling".to_string(),
        ];
        assert_eq!(
            build_filter(&specs).unwrap().as_str(),
            "year(startdato)%20ge%202003%20and%20substringof(%27samling%27,titel)%20eq%20true"
        );
    }

    #[test]
    fn test_build_filter_reports_bad_spec() {
        let specs = vec![
            "date:startdato:ge:2003".to_string(),
            "date:startdato:after:2003".to_string(),
        ];
        let err = build_filter(&specs).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
