//! The `$filter` expression builder.

mod clause;
mod common;
mod date;
mod search;

pub use self::clause::FilterClause;
pub use self::common::{EqualityDenoter, FilterKind, AND, EQUALITY_DENOTERS, FILTER_KINDS};
pub use self::date::DateClause;
pub use self::search::{sanitize_search_term, SearchClause};

use crate::Error;

/// A URL-encoded logical-AND filter expression, ready to be used as the
/// `$filter` query parameter.
///
/// Clauses are appended in place; every clause after the first is preceded
/// by exactly one [`AND`] joiner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    string: String,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter seeded with one clause.
    pub fn from_clause(clause: impl Into<FilterClause>) -> Self {
        let mut filter = Self::new();
        filter.add_filter(clause);
        filter
    }

    /// Creates a filter seeded with one clause given in text form, e.g.
    /// `date:startdato:ge:2003`.
    pub fn from_spec(spec: &str) -> Result<Self, Error> {
        Ok(Self::from_clause(spec.parse::<FilterClause>()?))
    }

    /// Appends a clause.
    pub fn add_filter(&mut self, clause: impl Into<FilterClause>) -> &mut Self {
        let rendered = clause.into().render();
        self.push_clause(&rendered);
        self
    }

    /// Appends a clause given in text form. Nothing is appended on error.
    pub fn add_spec(&mut self, spec: &str) -> Result<&mut Self, Error> {
        let clause: FilterClause = spec.parse()?;
        Ok(self.add_filter(clause))
    }

    /// Appends a date clause. `equality_denoter` must be one of
    /// [`EQUALITY_DENOTERS`]; it is checked before anything is appended.
    pub fn add_date_filter(
        &mut self,
        date_column: &str,
        equality_denoter: &str,
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
    ) -> Result<&mut Self, Error> {
        let denoter: EqualityDenoter = equality_denoter.parse()?;
        let mut clause = DateClause::new(date_column, denoter).with_year(year);
        clause.month = month;
        clause.day = day;
        Ok(self.add_filter(clause))
    }

    /// Appends a search clause.
    pub fn add_search_filter(
        &mut self,
        column: &str,
        search_term: &str,
        exact_match: bool,
    ) -> &mut Self {
        self.add_filter(SearchClause::new(column, search_term).with_exact_match(exact_match))
    }

    /// Builder form of [`Filter::add_filter`].
    pub fn with_filter(mut self, clause: impl Into<FilterClause>) -> Self {
        self.add_filter(clause);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    pub fn into_string(self) -> String {
        self.string
    }

    // Clauses that render to nothing (a date clause with no parts) are skipped.
    fn push_clause(&mut self, rendered: &str) {
        if rendered.is_empty() {
            return;
        }
        if !self.string.is_empty() {
            self.string.push_str(AND);
        }
        self.string.push_str(rendered);
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string)
    }
}

impl<C: Into<FilterClause>> FromIterator<C> for Filter {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut filter = Filter::new();
        filter.extend(iter);
        filter
    }
}

impl<C: Into<FilterClause>> Extend<C> for Filter {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for clause in iter {
            self.add_filter(clause);
        }
    }
}
