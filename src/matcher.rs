//! Binding queries to operands and evaluating them together.

use crate::query::{Query, QueryError};

/// A query bound to its operand, reduced to a zero-argument check.
pub trait Matcher {
    fn is_match(&self) -> Result<bool, QueryError>;
}

/// A query plus the candidate it will be evaluated against.
///
/// Build one per field of a record, collect them behind [`Matcher`], then
/// hand the lot to [`match_all`].
#[derive(Debug, Clone)]
pub struct Match<T, Q> {
    query: Q,
    operand: Option<T>,
}

impl<T, Q: Query<T>> Match<T, Q> {
    pub fn new(query: Q, operand: Option<T>) -> Self {
        Self { query, operand }
    }

    /// Binds a definite (non-optional) operand.
    pub fn value(query: Q, operand: T) -> Self {
        Self::new(query, Some(operand))
    }
}

impl<T, Q: Query<T>> Matcher for Match<T, Q> {
    fn is_match(&self) -> Result<bool, QueryError> {
        self.query.matches_option(self.operand.as_ref())
    }
}

/// Evaluates matchers left to right, stopping at the first error or the
/// first miss. An empty slice matches vacuously.
pub fn match_all(matches: &[&dyn Matcher]) -> Result<bool, QueryError> {
    for m in matches {
        if !m.is_match()? {
            return Ok(false);
        }
    }
    Ok(true)
}
