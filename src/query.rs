//! Generic matching strategies over optional criteria.

use thiserror::Error;

/// The matching strategies a query can apply to a candidate.
///
/// A strategy compares two sides: the *criterion* stored in the query and the
/// *candidate* supplied at evaluation time, either of which may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Matches unconditionally.
    Always,
    /// Matches iff the candidate is absent.
    None,
    /// Matches iff the candidate is present; the criterion is ignored.
    Any,
    /// Reserved for matching within collections of values.
    // TODO: give Some its own semantics once collection criteria are
    // supported; until then it evaluates exactly like Exact.
    Some,
    /// Matches iff criterion and candidate are both present and equal, or
    /// both absent.
    Exact,
    /// Wildcard matching; strings only. See [`StringQuery`](crate::StringQuery).
    Like,
}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("cannot perform Like matches on a generic field; use StringQuery instead")]
    LikeUnsupported,
    #[error("failed to build pattern regex: {0}")]
    RegexBuild(#[from] regex::Error),
}

/// A matching predicate over values of type `T`.
///
/// Both query kinds implement this, and record-level query types implement it
/// themselves by fanning a candidate record out to one field query per field.
pub trait Query<T: ?Sized> {
    /// Tests a candidate that is definitely present.
    fn matches(&self, candidate: &T) -> Result<bool, QueryError>;

    /// Tests a candidate that may itself be absent.
    fn matches_option(&self, candidate: Option<&T>) -> Result<bool, QueryError>;
}

/// A strategy plus an optional criterion for a field of any
/// equality-comparable type.
///
/// `Like` is rejected here; string fields wanting wildcard patterns use
/// [`StringQuery`](crate::StringQuery) instead.
///
/// # Example
///
/// ```
/// use optquery::{FieldQuery, Query};
///
/// let query = FieldQuery::exact(47);
/// assert!(query.matches(&47).unwrap());
/// assert!(!query.matches_option(None).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FieldQuery<T> {
    match_type: MatchType,
    value: Option<T>,
}

impl<T> FieldQuery<T> {
    /// Builds a query from any strategy/criterion combination, including
    /// states the named constructors never produce.
    pub fn new(match_type: MatchType, value: Option<T>) -> Self {
        Self { match_type, value }
    }

    pub fn always() -> Self {
        Self::new(MatchType::Always, None)
    }

    pub fn none(value: T) -> Self {
        Self::new(MatchType::None, Some(value))
    }

    pub fn any(value: T) -> Self {
        Self::new(MatchType::Any, Some(value))
    }

    pub fn exact(value: T) -> Self {
        Self::new(MatchType::Exact, Some(value))
    }

    pub fn like(value: T) -> Self {
        Self::new(MatchType::Like, Some(value))
    }
}

impl<T: PartialEq> Query<T> for FieldQuery<T> {
    fn matches(&self, candidate: &T) -> Result<bool, QueryError> {
        match self.match_type {
            MatchType::Always => Ok(true),
            MatchType::None => Ok(false),
            // A plain candidate is always some value.
            MatchType::Any => Ok(true),
            MatchType::Some | MatchType::Exact => match &self.value {
                Some(value) => Ok(value == candidate),
                None => Ok(false),
            },
            MatchType::Like => Err(QueryError::LikeUnsupported),
        }
    }

    fn matches_option(&self, candidate: Option<&T>) -> Result<bool, QueryError> {
        match self.match_type {
            MatchType::Always => Ok(true),
            MatchType::None => Ok(candidate.is_none()),
            MatchType::Any => Ok(candidate.is_some()),
            MatchType::Some | MatchType::Exact => match (&self.value, candidate) {
                (Some(value), Some(other)) => Ok(value == other),
                // Absent matches absent: filter semantics, not SQL
                // three-valued NULL logic.
                (None, None) => Ok(true),
                _ => Ok(false),
            },
            MatchType::Like => Err(QueryError::LikeUnsupported),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_matches_everything() {
        // A user can hand Always any criterion state; all behave alike.
        for query in [
            FieldQuery::new(MatchType::Always, Some(42)),
            FieldQuery::new(MatchType::Always, Some(47)),
            FieldQuery::always(),
        ] {
            assert!(query.matches(&47).unwrap());
            assert!(query.matches_option(Some(&47)).unwrap());
            assert!(query.matches_option(None).unwrap());
        }
    }

    #[test]
    fn test_none_matches_only_absent() {
        for query in [
            FieldQuery::none(42),
            FieldQuery::none(47),
            FieldQuery::new(MatchType::None, None),
        ] {
            assert!(!query.matches(&47).unwrap());
            assert!(!query.matches_option(Some(&47)).unwrap());
            assert!(query.matches_option(None).unwrap());
        }
    }

    #[test]
    fn test_any_matches_only_present() {
        for query in [
            FieldQuery::any(42),
            FieldQuery::any(47),
            FieldQuery::new(MatchType::Any, None),
        ] {
            assert!(query.matches(&47).unwrap());
            assert!(query.matches_option(Some(&47)).unwrap());
            assert!(!query.matches_option(None).unwrap());
        }
    }

    #[test]
    fn test_exact_with_different_criterion() {
        let query = FieldQuery::exact(42);
        assert!(!query.matches(&47).unwrap());
        assert!(!query.matches_option(Some(&47)).unwrap());
        assert!(!query.matches_option(None).unwrap());
    }

    #[test]
    fn test_exact_with_same_criterion() {
        let query = FieldQuery::exact(47);
        assert!(query.matches(&47).unwrap());
        assert!(query.matches_option(Some(&47)).unwrap());
        assert!(!query.matches_option(None).unwrap());
    }

    #[test]
    fn test_exact_with_absent_criterion() {
        let query = FieldQuery::new(MatchType::Exact, None);
        assert!(!query.matches(&47).unwrap());
        assert!(!query.matches_option(Some(&47)).unwrap());
        assert!(query.matches_option(None).unwrap());
    }

    #[test]
    fn test_some_behaves_like_exact() {
        let query = FieldQuery::new(MatchType::Some, Some(47));
        assert!(query.matches(&47).unwrap());
        assert!(!query.matches(&42).unwrap());
        assert!(!query.matches_option(None).unwrap());

        let empty = FieldQuery::new(MatchType::Some, None);
        assert!(empty.matches_option(None).unwrap());
        assert!(!empty.matches_option(Some(&47)).unwrap());
    }

    #[test]
    fn test_like_rejected_on_generic_fields() {
        for query in [
            FieldQuery::like(42),
            FieldQuery::like(47),
            FieldQuery::new(MatchType::Like, None),
        ] {
            assert!(matches!(
                query.matches(&47),
                Err(QueryError::LikeUnsupported)
            ));
            assert!(matches!(
                query.matches_option(Some(&47)),
                Err(QueryError::LikeUnsupported)
            ));
            assert!(matches!(
                query.matches_option(None),
                Err(QueryError::LikeUnsupported)
            ));
        }
    }

    #[test]
    fn test_works_for_any_comparable_type() {
        #[derive(PartialEq)]
        struct Pair(u8, u8);

        let query = FieldQuery::exact(Pair(1, 2));
        assert!(query.matches(&Pair(1, 2)).unwrap());
        assert!(!query.matches(&Pair(2, 1)).unwrap());
    }
}
