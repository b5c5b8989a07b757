//! The parsed query value
//!
//! A `Query` is built once per search request and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed search query: named filters plus free-text terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// The raw input string, untouched
    original: String,
    /// Filter names in input order; duplicates are kept
    filters: Vec<String>,
    /// Non-filter tokens rejoined by single spaces, in input order
    terms: String,
}

impl Query {
    pub(crate) fn new(
        original: impl Into<String>,
        filters: Vec<String>,
        terms: String,
    ) -> Self {
        Self {
            original: original.into(),
            filters,
            terms,
        }
    }

    /// The raw input this query was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Filter names in the order they appeared in the input
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// The free-text search terms, joined by single spaces
    pub fn terms(&self) -> &str {
        &self.terms
    }

    /// True when the query carries neither terms nor filters.
    ///
    /// A blank query means "show everything": no join, no where, no filter.
    pub fn is_blank(&self) -> bool {
        self.terms.is_empty() && self.filters.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
