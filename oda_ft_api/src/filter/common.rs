//! Shared filter vocabulary: the AND joiner, [`EqualityDenoter`] and [`FilterKind`].

use std::str::FromStr;

use crate::Error;

/// URL-encoded logical AND placed between two clauses.
pub const AND: &str = "%20and%20";

/// URL-encoded space.
pub const SPACE: &str = "%20";

/// The accepted equality denoter tokens, in the order they are reported.
pub const EQUALITY_DENOTERS: &[&str] = &["eq", "ne", "gt", "ge", "lt", "le"];

/// The accepted filter type tags.
pub const FILTER_KINDS: &[&str] = &["date", "search"];

/// OData comparison operator used by date clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EqualityDenoter {
    /// `eq`
    Eq,
    /// `ne`
    Ne,
    /// `gt`
    Gt,
    /// `ge`
    Ge,
    /// `lt`
    Lt,
    /// `le`
    Le,
}

impl EqualityDenoter {
    pub fn as_str(&self) -> &'static str {
        match self {
            EqualityDenoter::Eq => "eq",
            EqualityDenoter::Ne => "ne",
            EqualityDenoter::Gt => "gt",
            EqualityDenoter::Ge => "ge",
            EqualityDenoter::Lt => "lt",
            EqualityDenoter::Le => "le",
        }
    }
}

impl std::fmt::Display for EqualityDenoter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EqualityDenoter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(EqualityDenoter::Eq),
            "ne" => Ok(EqualityDenoter::Ne),
            "gt" => Ok(EqualityDenoter::Gt),
            "ge" => Ok(EqualityDenoter::Ge),
            "lt" => Ok(EqualityDenoter::Lt),
            "le" => Ok(EqualityDenoter::Le),
            _ => Err(Error::InvalidEqualityDenoter {
                got: s.to_string(),
                allowed: EQUALITY_DENOTERS,
            }),
        }
    }
}

/// Which clause builder a textual filter spec dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Date,
    Search,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FilterKind::Date => "date",
                FilterKind::Search => "search",
            }
        )
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(FilterKind::Date),
            "search" => Ok(FilterKind::Search),
            _ => Err(Error::InvalidFilterType {
                got: s.to_string(),
                allowed: FILTER_KINDS,
            }),
        }
    }
}
