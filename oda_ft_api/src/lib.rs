//! Helpers for querying the Danish Parliament's ODA FT API (`https://oda.ft.dk/api/`).
//!
//! [`Filter`] builds the URL-encoded `$filter` expression out of date and
//! text-search clauses; [`Client`] turns a resource name and a filter into a
//! request URL and returns the records under the response's `value` key.
//!
//! ```no_run
//! use oda_ft_api::{Client, DateClause, EqualityDenoter, Filter};
//!
//! # async fn run() -> Result<(), oda_ft_api::Error> {
//! let filter = Filter::from_clause(
//!     DateClause::new("startdato", EqualityDenoter::Ge).with_year(2003),
//! );
//! let periods = Client::new().get("Periode", Some(&filter)).await?;
//! println!("{} periods", periods.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
pub mod filter;
pub use self::client::{extract_value, Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::filter::{
    DateClause, EqualityDenoter, Filter, FilterClause, FilterKind, SearchClause,
};
