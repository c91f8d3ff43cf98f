//! String-specialized queries with `%`/`_` wildcard support.

use regex::Regex;

use crate::query::{MatchType, Query, QueryError};

/// A strategy plus an optional criterion for string fields.
///
/// Unlike [`FieldQuery`](crate::FieldQuery) this supports `Like`: the
/// criterion is a wildcard pattern where `%` matches any run of characters
/// and `_` matches exactly one. Patterns are unanchored, so a pattern without
/// wildcards at its ends may match anywhere inside the candidate.
///
/// # Example
///
/// ```
/// use optquery::StringQuery;
///
/// let query = StringQuery::like("o%gi_al");
/// assert!(query.matches("original").unwrap());
/// assert!(!query.matches("orig%").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct StringQuery {
    match_type: MatchType,
    value: Option<String>,
}

impl StringQuery {
    /// Builds a query from any strategy/criterion combination, including
    /// states the named constructors never produce.
    pub fn new(match_type: MatchType, value: Option<String>) -> Self {
        Self { match_type, value }
    }

    pub fn always() -> Self {
        Self::new(MatchType::Always, None)
    }

    pub fn none(value: impl Into<String>) -> Self {
        Self::new(MatchType::None, Some(value.into()))
    }

    pub fn any(value: impl Into<String>) -> Self {
        Self::new(MatchType::Any, Some(value.into()))
    }

    pub fn exact(value: impl Into<String>) -> Self {
        Self::new(MatchType::Exact, Some(value.into()))
    }

    pub fn like(value: impl Into<String>) -> Self {
        Self::new(MatchType::Like, Some(value.into()))
    }

    /// Tests a candidate that is definitely present.
    pub fn matches(&self, candidate: &str) -> Result<bool, QueryError> {
        let Some(value) = &self.value else {
            return Ok(match self.match_type {
                MatchType::Always => true,
                MatchType::None => false,
                // A plain candidate is always some value.
                MatchType::Any => true,
                MatchType::Some | MatchType::Exact => false,
                // No pattern to test against.
                MatchType::Like => false,
            });
        };

        match self.match_type {
            MatchType::Always => Ok(true),
            MatchType::None => Ok(false),
            MatchType::Any => Ok(true),
            MatchType::Some | MatchType::Exact => Ok(value == candidate),
            MatchType::Like => like_matches(value, candidate),
        }
    }

    /// Tests a candidate that may itself be absent.
    pub fn matches_option(&self, candidate: Option<&str>) -> Result<bool, QueryError> {
        let Some(value) = &self.value else {
            // Absent criterion: every strategy reduces to a presence test.
            return Ok(match self.match_type {
                MatchType::Always => true,
                MatchType::None
                | MatchType::Some
                | MatchType::Exact
                | MatchType::Like => candidate.is_none(),
                MatchType::Any => candidate.is_some(),
            });
        };

        let Some(other) = candidate else {
            // None matches an absent candidate even with a criterion
            // configured; the other strategies have nothing to compare.
            return Ok(match self.match_type {
                MatchType::Always | MatchType::None => true,
                MatchType::Any
                | MatchType::Some
                | MatchType::Exact
                | MatchType::Like => false,
            });
        };

        match self.match_type {
            MatchType::Always | MatchType::Any => Ok(true),
            MatchType::None => Ok(false),
            MatchType::Some | MatchType::Exact => Ok(value == other),
            MatchType::Like => like_matches(value, other),
        }
    }
}

impl Query<String> for StringQuery {
    fn matches(&self, candidate: &String) -> Result<bool, QueryError> {
        StringQuery::matches(self, candidate)
    }

    fn matches_option(&self, candidate: Option<&String>) -> Result<bool, QueryError> {
        StringQuery::matches_option(self, candidate.map(String::as_str))
    }
}

/// Translates a wildcard criterion into a regex and tests the candidate
/// against it, unanchored.
///
/// The rewrite is plain substring replacement (`%` to `.*`, `_` to `.`):
/// regex metacharacters already present in the criterion pass through
/// unescaped, for compatibility with existing callers.
fn like_matches(pattern: &str, candidate: &str) -> Result<bool, QueryError> {
    let regex = Regex::new(&pattern.replace('%', ".*").replace('_', "."))?;
    Ok(regex.is_match(candidate))
}
