//! The search engine
//!
//! Orchestrates one search request: parse the query, resolve the mode,
//! build the predicate, delegate join + where to the storage collaborator,
//! then apply named filters to the result. Search always precedes filter
//! application; filters only narrow matched rows.

pub mod predicate;

use crate::dashboard::Dashboard;
use crate::storage::ScopedCollection;
use predicate::PredicateBuilder;
use siftq::Query;

/// Run a search over a scoped collection.
///
/// Returns the collection unmodified when the parsed query is blank,
/// otherwise the search-then-filter result. The returned collection is
/// still lazily composed; nothing executes until the caller materializes
/// it.
pub fn run<C: ScopedCollection>(scoped: C, dashboard: &Dashboard<C>, raw: &str) -> C {
    SearchEngine::new(dashboard, raw).execute(scoped)
}

/// A request-scoped engine: one query, one mode, one dashboard borrow.
///
/// Created fresh per search invocation and discarded after.
pub struct SearchEngine<'a, C> {
    dashboard: &'a Dashboard<C>,
    query: Query,
}

impl<'a, C: ScopedCollection> SearchEngine<'a, C> {
    pub fn new(dashboard: &'a Dashboard<C>, raw: &str) -> Self {
        Self {
            dashboard,
            query: siftq::parse(raw),
        }
    }

    /// The parsed query this engine will execute
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Execute the search against the given scoped collection
    pub fn execute(&self, scoped: C) -> C {
        if self.query.is_blank() {
            return scoped;
        }

        tracing::debug!(
            "searching '{}' on '{}': mode={:?}, filters={:?}",
            self.query.terms(),
            self.dashboard.name,
            self.dashboard.search_mode,
            self.query.filters(),
        );

        let searched = self.search(scoped);
        self.apply_filters(searched)
    }

    fn search(&self, resource: C) -> C {
        let builder = PredicateBuilder::new(
            &self.dashboard.attributes,
            self.dashboard.search_mode,
            self.query.terms(),
        );
        let predicate = builder.build(&resource);

        resource.join(&predicate.joins).matching(&predicate)
    }

    fn apply_filters(&self, mut resources: C) -> C {
        for name in self.query.filters() {
            if let Some(filter) = self.dashboard.filters.get(name) {
                resources = filter(resources);
            }
        }
        resources
    }
}
