use super::common::SPACE;

/// A text search on one column, either an exact `eq` comparison against a
/// quoted literal or a `substringof` predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchClause {
    pub column: String,
    pub term: String,
    pub exact_match: bool,
}

impl SearchClause {
    /// Creates a substring search.
    pub fn new(column: &str, term: &str) -> Self {
        Self {
            column: column.to_string(),
            term: term.to_string(),
            exact_match: false,
        }
    }

    /// Creates an exact-match search.
    pub fn exact(column: &str, term: &str) -> Self {
        Self::new(column, term).with_exact_match(true)
    }

    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Renders the URL-encoded clause from the sanitized term.
    pub fn render(&self) -> String {
        let term = sanitize_search_term(&self.term);
        if self.exact_match {
            format!("{}{}eq{}%27{}%27", self.column, SPACE, SPACE, term)
        } else {
            format!(
                "substringof(%27{}%27,{}){}eq{}true",
                term, self.column, SPACE, SPACE
            )
        }
    }
}

/// Keeps ASCII letters, digits and spaces, then encodes each space as `%20`.
///
/// Everything else is dropped, including non-ASCII letters such as `ø`:
/// `"Mette Møller"` becomes `"Mette%20Mller"`.
pub fn sanitize_search_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .replace(' ', SPACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_search() {
        let clause = SearchClause::new("column", "search term");
        insta::assert_snapshot!(
            clause.render(),
            @"substringof(%27search%20term%27,column)%20eq%20true"
        );
    }

    #[test]
    fn test_exact_search() {
        let clause = SearchClause::exact("column", "search term");
        assert_eq!(clause.render(), "column%20eq%20%27search%20term%27");
    }

    #[test]
    fn test_sanitize_strips_non_ascii_letters() {
        assert_eq!(sanitize_search_term("Mette Møller"), "Mette%20Mller");
        assert_eq!(sanitize_search_term("Søren Pape Poulsen"), "Sren%20Pape%20Poulsen");
        assert_eq!(sanitize_search_term("Lov om ændring"), "Lov%20om%20ndring");
    }

    #[test]
    fn test_sanitize_strips_punctuation_and_quotes() {
        assert_eq!(sanitize_search_term("O'Brien"), "OBrien");
        assert_eq!(sanitize_search_term("L 123, 2.beh."), "L%20123%202beh");
        assert_eq!(sanitize_search_term("a%27)or(1"), "a27or1");
    }

    #[test]
    fn test_sanitize_keeps_repeated_spaces() {
        assert_eq!(sanitize_search_term(" a  b "), "%20a%20%20b%20");
    }

    #[test]
    fn test_sanitize_tabs_are_dropped() {
        assert_eq!(sanitize_search_term("a\tb\nc"), "abc");
    }
}
