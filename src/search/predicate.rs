//! Predicate construction
//!
//! The builder walks the searchable attributes of a dashboard and produces a
//! [`Predicate`]: the relations to join plus an ordered list of
//! [`Comparison`]s. Each comparison carries its qualified column, its
//! operator, and its bound value in one struct, so the number of clauses
//! always equals the number of bound values by construction - the central
//! invariant of this module.

use crate::dashboard::{Attribute, AttributeKind, SearchMode};
use crate::storage::ScopedCollection;

/// A column qualified by the table it lives on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedColumn {
    pub table: String,
    pub column: String,
}

/// The comparison operator of one clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOp {
    /// Exact equality against the bound value
    Equals,
    /// Case-insensitive substring match; the bound value carries the
    /// `%...%` wildcards
    ContainsInsensitive,
}

/// One comparison clause together with its bound value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub column: QualifiedColumn,
    pub op: MatchOp,
    pub value: String,
}

impl SearchMode {
    /// Build the comparison this strategy emits for one column.
    ///
    /// Fuzzy lowercasing is Unicode-aware (`str::to_lowercase`); hosts must
    /// make sure the storage engine's column case-folding agrees with it,
    /// byte-wise ASCII folding is not assumed.
    pub fn comparison(self, column: QualifiedColumn, term: &str) -> Comparison {
        match self {
            SearchMode::Strict => Comparison {
                column,
                op: MatchOp::Equals,
                value: term.to_string(),
            },
            SearchMode::Fuzzy => Comparison {
                column,
                op: MatchOp::ContainsInsensitive,
                value: format!("%{}%", term.to_lowercase()),
            },
        }
    }
}

/// One relation to join: the attribute name and the table it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    /// The association attribute's name, how a host ORM addresses the
    /// relation
    pub relation: String,
    /// The resolved related table: the explicit override if present, else
    /// the pluralized attribute name
    pub table: String,
}

impl Join {
    pub fn new(relation: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            table: table.into(),
        }
    }
}

/// The relations to join and the OR-combined comparison list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    /// Searchable association attributes in declared order, each with its
    /// resolved table so join and comparison agree on where a row's
    /// related values live
    pub joins: Vec<Join>,
    /// Comparison clauses in emission order: attributes in declared order,
    /// fields in declared order within each attribute
    pub comparisons: Vec<Comparison>,
}

impl Predicate {
    /// Number of clauses, which is also the number of bound values
    pub fn fields_count(&self) -> usize {
        self.comparisons.len()
    }

    /// Bound values in clause order
    pub fn values(&self) -> Vec<&str> {
        self.comparisons.iter().map(|c| c.value.as_str()).collect()
    }
}

/// Builds a [`Predicate`] from attribute descriptors and a search term
pub struct PredicateBuilder<'a> {
    attributes: &'a [Attribute],
    mode: SearchMode,
    term: &'a str,
}

impl<'a> PredicateBuilder<'a> {
    pub fn new(attributes: &'a [Attribute], mode: SearchMode, term: &'a str) -> Self {
        Self {
            attributes,
            mode,
            term,
        }
    }

    /// Build the predicate against the given primary resource.
    ///
    /// The resource supplies the primary table name and the pluralization
    /// used when an association has no explicit related-table override. An
    /// attribute contributing zero fields yields zero clauses silently; an
    /// unresolvable related table is not validated here and surfaces as a
    /// storage execution failure.
    pub fn build<C: ScopedCollection>(&self, resource: &C) -> Predicate {
        let mut predicate = Predicate::default();

        for attr in self.attributes.iter().filter(|a| a.searchable) {
            let table = match &attr.kind {
                AttributeKind::Association { related_table, .. } => {
                    let table = related_table
                        .clone()
                        .unwrap_or_else(|| resource.pluralize(&attr.name));
                    predicate.joins.push(Join::new(attr.name.clone(), table.clone()));
                    table
                }
                AttributeKind::Scalar => resource.table_name().to_string(),
            };

            for field in attr.searchable_fields() {
                let column = QualifiedColumn {
                    table: table.clone(),
                    column: field.clone(),
                };
                predicate
                    .comparisons
                    .push(self.mode.comparison(column, self.term));
            }
        }

        predicate
    }
}
