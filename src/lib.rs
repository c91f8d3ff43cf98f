//! Field-level predicate matching over optional values.
//!
//! A query pairs a [`MatchType`] strategy with an optional criterion value;
//! candidates (plain values or options) are tested against it. [`FieldQuery`]
//! works for any equality-comparable type, and [`StringQuery`] additionally
//! supports `Like` wildcard patterns (`%` for any run of characters, `_` for
//! exactly one). Per-field queries combine into record-level predicates
//! through [`Match`] and [`match_all`].
//!
//! # Example
//!
//! ```
//! use optquery::{match_all, FieldQuery, Match, StringQuery};
//!
//! let name = StringQuery::like("Chest%");
//! assert!(name.matches("Chester the Tester").unwrap());
//!
//! // Bind queries to operands, then evaluate them as one predicate.
//! let name = Match::value(name, "Chester the Tester".to_string());
//! let stars = Match::new(FieldQuery::exact(7), Some(7));
//! assert!(match_all(&[&name, &stars]).unwrap());
//! ```

mod matcher;
mod query;
mod string;

pub use matcher::{match_all, Match, Matcher};
pub use query::{FieldQuery, MatchType, Query, QueryError};
pub use string::StringQuery;
