//! [`FilterClause`], the tagged union over date and search clauses, and its text form.
//!
//! The text form is what the command line accepts:
//!
//! - `date:<column>:<op>:<YYYY>[-<MM>[-<DD>]]`
//! - `search:<column>:<term>[:exact|:substring]`

use std::str::FromStr;

use super::common::{EqualityDenoter, FilterKind};
use super::date::DateClause;
use super::search::SearchClause;
use crate::Error;

/// One filter predicate before it is joined into a [`Filter`](super::Filter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterClause {
    Date(DateClause),
    Search(SearchClause),
}

impl FilterClause {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterClause::Date(_) => FilterKind::Date,
            FilterClause::Search(_) => FilterKind::Search,
        }
    }

    /// Renders the URL-encoded clause.
    pub fn render(&self) -> String {
        match self {
            FilterClause::Date(clause) => clause.render(),
            FilterClause::Search(clause) => clause.render(),
        }
    }
}

impl From<DateClause> for FilterClause {
    fn from(clause: DateClause) -> Self {
        FilterClause::Date(clause)
    }
}

impl From<SearchClause> for FilterClause {
    fn from(clause: SearchClause) -> Self {
        FilterClause::Search(clause)
    }
}

impl FromStr for FilterClause {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, rest) = s.split_once(':').unwrap_or((s, ""));
        let kind: FilterKind = tag.parse()?;
        if rest.is_empty() {
            return Err(invalid_spec(s, "missing clause after the filter type"));
        }
        match kind {
            FilterKind::Date => parse_date(s, rest).map(FilterClause::Date),
            FilterKind::Search => parse_search(s, rest).map(FilterClause::Search),
        }
    }
}

fn parse_date(spec: &str, rest: &str) -> Result<DateClause, Error> {
    let mut fields = rest.splitn(3, ':');
    let column = non_empty_column(spec, fields.next())?;
    let denoter: EqualityDenoter = fields
        .next()
        .ok_or_else(|| invalid_spec(spec, "missing equality denoter"))?
        .parse()?;
    let date = fields
        .next()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| invalid_spec(spec, "missing date, expected YYYY[-MM[-DD]]"))?;

    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() > 3 {
        return Err(invalid_spec(spec, "date has more than three parts"));
    }

    let mut clause =
        DateClause::new(column, denoter).with_year(parse_part(spec, parts[0], "year")?);
    if let Some(month) = parts.get(1) {
        clause = clause.with_month(parse_ranged(spec, month, "month", 1..=12)?);
    }
    if let Some(day) = parts.get(2) {
        clause = clause.with_day(parse_ranged(spec, day, "day", 1..=31)?);
    }
    Ok(clause)
}

fn parse_search(spec: &str, rest: &str) -> Result<SearchClause, Error> {
    let mut fields = rest.splitn(2, ':');
    let column = non_empty_column(spec, fields.next())?;
    let tail = fields
        .next()
        .ok_or_else(|| invalid_spec(spec, "missing search term"))?;
    // Only a trailing `:exact` or `:substring` is a mode; any other colon
    // belongs to the term and is dropped by the sanitizer.
    let (term, exact_match) = match tail.rsplit_once(':') {
        Some((term, "exact")) => (term, true),
        Some((term, "substring")) => (term, false),
        _ => (tail, false),
    };
    Ok(SearchClause::new(column, term).with_exact_match(exact_match))
}

fn non_empty_column<'a>(spec: &str, column: Option<&'a str>) -> Result<&'a str, Error> {
    match column {
        Some(column) if !column.trim().is_empty() => Ok(column),
        _ => Err(invalid_spec(spec, "missing column name")),
    }
}

fn parse_part<T: FromStr>(spec: &str, value: &str, part: &str) -> Result<T, Error> {
    value
        .parse()
        .map_err(|_| invalid_spec(spec, &format!("{} '{}' is not a number", part, value)))
}

fn parse_ranged(
    spec: &str,
    value: &str,
    part: &str,
    range: std::ops::RangeInclusive<u32>,
) -> Result<u32, Error> {
    let number: u32 = parse_part(spec, value, part)?;
    if !range.contains(&number) {
        return Err(invalid_spec(
            spec,
            &format!(
                "{} {} is outside {}-{}",
                part,
                number,
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(number)
}

fn invalid_spec(spec: &str, reason: &str) -> Error {
    Error::InvalidFilterSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
