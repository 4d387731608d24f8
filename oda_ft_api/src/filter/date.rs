use chrono::{Datelike, NaiveDate};

use super::common::{EqualityDenoter, AND, SPACE};

/// A date comparison on one column, split into `year(..)`, `month(..)` and
/// `day(..)` terms that share the same operator.
///
/// Only the parts that are set are rendered. A clause with a day but no
/// year or month renders as a lone `day(..)` term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateClause {
    pub column: String,
    pub denoter: EqualityDenoter,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateClause {
    /// Creates a clause with no date parts set.
    pub fn new(column: &str, denoter: EqualityDenoter) -> Self {
        Self {
            column: column.to_string(),
            denoter,
            year: None,
            month: None,
            day: None,
        }
    }

    /// Compares all three parts against a calendar date.
    pub fn on(column: &str, denoter: EqualityDenoter, date: NaiveDate) -> Self {
        Self::new(column, denoter)
            .with_year(date.year())
            .with_month(date.month())
            .with_day(date.day())
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Renders the URL-encoded clause, e.g. `year(dato)%20ge%202003`.
    pub fn render(&self) -> String {
        let parts = [
            ("year", self.year.map(i64::from)),
            ("month", self.month.map(i64::from)),
            ("day", self.day.map(i64::from)),
        ];

        let mut clause = String::new();
        for (part, value) in parts {
            let Some(value) = value else { continue };
            if !clause.is_empty() {
                clause.push_str(AND);
            }
            clause.push_str(&format!(
                "{}({}){}{}{}{}",
                part, self.column, SPACE, self.denoter, SPACE, value
            ));
        }
        clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_date() {
        let clause = DateClause::new("date_column", EqualityDenoter::Eq)
            .with_year(2023)
            .with_month(1)
            .with_day(12);
        insta::assert_snapshot!(
            clause.render(),
            @"year(date_column)%20eq%202023%20and%20month(date_column)%20eq%201%20and%20day(date_column)%20eq%2012"
        );
    }

    #[test]
    fn test_year_only() {
        let clause = DateClause::new("startdato", EqualityDenoter::Ge).with_year(2003);
        assert_eq!(clause.render(), "year(startdato)%20ge%202003");
    }

    #[test]
    fn test_year_and_day_skips_month() {
        let clause = DateClause::new("date_column", EqualityDenoter::Lt)
            .with_year(2024)
            .with_day(13);
        assert_eq!(
            clause.render(),
            "year(date_column)%20lt%202024%20and%20day(date_column)%20lt%2013"
        );
    }

    #[test]
    fn test_day_only_has_no_leading_joiner() {
        let clause = DateClause::new("dato", EqualityDenoter::Eq).with_day(5);
        assert_eq!(clause.render(), "day(dato)%20eq%205");
    }

    #[test]
    fn test_no_parts_renders_empty() {
        assert_eq!(DateClause::new("dato", EqualityDenoter::Eq).render(), "");
    }

    #[test]
    fn test_on_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2019, 6, 5).unwrap();
        let clause = DateClause::on("opdateringsdato", EqualityDenoter::Gt, date);
        assert_eq!(clause.year, Some(2019));
        assert_eq!(clause.month, Some(6));
        assert_eq!(clause.day, Some(5));
        assert_eq!(
            clause.render(),
            "year(opdateringsdato)%20gt%202019%20and%20month(opdateringsdato)%20gt%206%20and%20day(opdateringsdato)%20gt%205"
        );
    }
}
