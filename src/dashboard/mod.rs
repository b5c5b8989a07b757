//! Dashboard configuration: the attribute descriptor set for one entity type
//!
//! A dashboard declares which attributes of an entity are searchable, which
//! of them reach into a related entity, which search mode applies, and which
//! named filters callers may invoke. It is built once when configuration
//! loads and is read-only for its lifetime; concurrent searches share it
//! freely.
//!
//! Dashboards can be assembled with the builder API here or loaded from
//! YAML/JSON definitions (see [`loader`]). Filters are closures and are
//! always registered programmatically.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::filters::FilterRegistry;

/// How search terms are compared against column values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exact equality, case-sensitive (collation-dependent)
    Strict,
    /// Case-insensitive substring match; the default
    #[default]
    Fuzzy,
}

/// What an attribute points at: a column on the primary table, or a relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    /// A plain column on the primary resource's table
    Scalar,
    /// A relation to another entity type, searchable via fields on it
    Association {
        /// Fields on the related entity to search, in declared order
        searchable_fields: Vec<String>,
        /// Explicit related table name; `None` means "pluralize the
        /// attribute name" via the storage collaborator
        related_table: Option<String>,
    },
}

/// A single attribute descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub searchable: bool,
    pub kind: AttributeKind,
}

impl Attribute {
    /// A searchable scalar attribute
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searchable: true,
            kind: AttributeKind::Scalar,
        }
    }

    /// A searchable association attribute with the given fields on the
    /// related entity
    pub fn association<I, F>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            searchable: true,
            kind: AttributeKind::Association {
                searchable_fields: fields.into_iter().map(Into::into).collect(),
                related_table: None,
            },
        }
    }

    /// Override the related table name (defaults to the pluralized
    /// attribute name). No effect on scalar attributes.
    pub fn related_table(mut self, table: impl Into<String>) -> Self {
        if let AttributeKind::Association { related_table, .. } = &mut self.kind {
            *related_table = Some(table.into());
        }
        self
    }

    /// Mark the attribute searchable or not
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// The fields one search clause is emitted for.
    ///
    /// Scalar attributes behave as if their field list were `[name]`.
    pub fn searchable_fields(&self) -> &[String] {
        match &self.kind {
            AttributeKind::Scalar => std::slice::from_ref(&self.name),
            AttributeKind::Association {
                searchable_fields, ..
            } => searchable_fields,
        }
    }

    /// True for association attributes
    pub fn is_association(&self) -> bool {
        matches!(self.kind, AttributeKind::Association { .. })
    }
}

/// The full search configuration for one entity type
pub struct Dashboard<C> {
    /// Entity name this dashboard describes
    pub name: String,
    /// Attribute descriptors, in declared order
    pub attributes: Vec<Attribute>,
    /// Comparison strategy; absent from a definition means fuzzy
    pub search_mode: SearchMode,
    /// Named collection-narrowing predicates
    pub filters: FilterRegistry<C>,
}

impl<C> Dashboard<C> {
    /// Create an empty dashboard for the given entity name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            search_mode: SearchMode::default(),
            filters: FilterRegistry::new(),
        }
    }

    /// Add an attribute descriptor
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the search mode
    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Register a named filter predicate
    pub fn filter(
        mut self,
        name: impl Into<String>,
        filter: impl Fn(C) -> C + Send + Sync + 'static,
    ) -> Self {
        self.filters.register(name, filter);
        self
    }

    /// Searchable attributes, in declared order
    pub fn search_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.searchable)
    }
}

impl<C> std::fmt::Debug for Dashboard<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("search_mode", &self.search_mode)
            .field("filters", &self.filters)
            .finish()
    }
}
