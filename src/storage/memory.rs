//! In-memory storage adapter
//!
//! A reference implementation of [`ScopedCollection`] over plain rows. It
//! evaluates predicates directly instead of rendering SQL, which makes it
//! the backend of choice for host test suites (and for this crate's own
//! integration tests). `ContainsInsensitive` interprets the `%`/`_`
//! wildcards of the bound value by translating them into a regex.

use std::collections::HashMap;

use super::ScopedCollection;
use crate::search::predicate::{Comparison, Join, MatchOp, Predicate};

/// One row of the primary table, with optional related rows
#[derive(Debug, Clone, Default)]
pub struct MemoryRow {
    /// Row identifier, used by tests to assert result sets
    pub id: String,
    fields: HashMap<String, String>,
    /// Related rows keyed by related table name
    related: HashMap<String, Vec<HashMap<String, String>>>,
}

impl MemoryRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set a column value on the primary table
    pub fn set(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    /// Attach a related row under the given related table name
    pub fn related<I, K, V>(mut self, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let row = columns
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.related.entry(table.into()).or_default().push(row);
        self
    }

    /// Get a primary-table column value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    fn has_relation(&self, table: &str) -> bool {
        self.related.get(table).is_some_and(|rows| !rows.is_empty())
    }

    /// Candidate values for a qualified column on this row
    fn values_for(&self, primary_table: &str, table: &str, column: &str) -> Vec<&str> {
        if table == primary_table {
            return self.get(column).into_iter().collect();
        }
        self.related
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| row.get(column).map(String::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An in-memory scoped collection of rows
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    table: String,
    rows: Vec<MemoryRow>,
}

impl MemoryCollection {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
        }
    }

    pub fn insert(&mut self, row: MemoryRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MemoryRow] {
        &self.rows
    }

    /// Row IDs in collection order
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    /// Keep only rows the predicate accepts; handy for building filters
    pub fn retain(mut self, keep: impl Fn(&MemoryRow) -> bool) -> Self {
        self.rows.retain(|row| keep(row));
        self
    }

    /// Drop the first row, keeping the rest
    pub fn drop_first(mut self) -> Self {
        if !self.rows.is_empty() {
            self.rows.remove(0);
        }
        self
    }
}

impl ScopedCollection for MemoryCollection {
    fn table_name(&self) -> &str {
        &self.table
    }

    fn join(mut self, relations: &[Join]) -> Self {
        // inner-join semantics: a row without the related rows disappears
        self.rows
            .retain(|row| relations.iter().all(|j| row.has_relation(&j.table)));
        self
    }

    fn matching(mut self, predicate: &Predicate) -> Self {
        if predicate.comparisons.is_empty() {
            return self;
        }
        let table = self.table.clone();
        self.rows.retain(|row| {
            predicate
                .comparisons
                .iter()
                .any(|comparison| row_matches(row, &table, comparison))
        });
        self
    }
}

fn row_matches(row: &MemoryRow, primary_table: &str, comparison: &Comparison) -> bool {
    row.values_for(primary_table, &comparison.column.table, &comparison.column.column)
        .iter()
        .any(|candidate| value_matches(comparison.op, candidate, &comparison.value))
}

fn value_matches(op: MatchOp, candidate: &str, bound: &str) -> bool {
    match op {
        MatchOp::Equals => candidate == bound,
        MatchOp::ContainsInsensitive => like_match(bound, &candidate.to_lowercase()),
    }
}

/// Match a SQL LIKE pattern: `%` matches any sequence, `_` any single
/// character, everything else is literal.
fn like_match(pattern: &str, value: &str) -> bool {
    let mut regex_pattern = String::with_capacity(pattern.len() + 2);
    regex_pattern.push('^');
    for c in pattern.chars() {
        match c {
            '%' => regex_pattern.push_str(".*"),
            '_' => regex_pattern.push('.'),
            c => regex_pattern.push_str(&regex::escape(&c.to_string())),
        }
    }
    regex_pattern.push('$');

    regex::Regex::new(&regex_pattern)
        .map(|r| r.is_match(value))
        .unwrap_or(false)
}
