//! Named filter predicates over the result-collection abstraction
//!
//! A filter maps a collection to a narrower collection. Filters are applied
//! sequentially in the order their tokens appeared in the query, so they
//! compose as intersections, never as unions. Looking up a name that was
//! never registered is a no-op, not an error.

use std::collections::HashMap;

/// A collection-narrowing predicate
pub type CollectionFilter<C> = Box<dyn Fn(C) -> C + Send + Sync>;

/// Registry of named filters, populated once at configuration load
pub struct FilterRegistry<C> {
    filters: HashMap<String, CollectionFilter<C>>,
}

impl<C> FilterRegistry<C> {
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Register a filter under the given name, replacing any previous one
    pub fn register(
        &mut self,
        name: impl Into<String>,
        filter: impl Fn(C) -> C + Send + Sync + 'static,
    ) {
        self.filters.insert(name.into(), Box::new(filter));
    }

    /// Look up a filter by name
    pub fn get(&self, name: &str) -> Option<&CollectionFilter<C>> {
        self.filters.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Registered filter names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}

impl<C> Default for FilterRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for FilterRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FilterRegistry")
            .field("names", &names)
            .finish()
    }
}
