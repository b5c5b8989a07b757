//! Storage collaborator abstraction
//!
//! The engine never talks to a database directly; it composes a scoped,
//! lazily-executed collection through the [`ScopedCollection`] trait and
//! leaves execution to the host. Two reference adapters ship with the
//! crate: a parameterized-SQL translator ([`sql`]) and an in-memory row
//! store ([`memory`]) used in tests.

pub mod memory;
pub mod sql;

use crate::search::predicate::{Join, Predicate};

/// A composable, lazily-executed row set against some storage engine.
///
/// `join` and `matching` return a new scoped collection; nothing executes
/// until the host materializes the result. Failures from unresolvable
/// relations or bad references surface at that point, with the storage
/// engine's native error, not here.
pub trait ScopedCollection: Sized {
    /// The table backing the primary resource
    fn table_name(&self) -> &str;

    /// The default table name for a related entity.
    ///
    /// Hosts with irregular nouns either override this or set an explicit
    /// related-table override on the attribute.
    fn pluralize(&self, name: &str) -> String {
        pluralize(name)
    }

    /// Join the given relations, each already resolved to its table
    fn join(self, relations: &[Join]) -> Self;

    /// Narrow to rows matching any comparison of the predicate
    fn matching(self, predicate: &Predicate) -> Self;
}

/// Pluralize a regular English noun to its conventional table name
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{}ies", stem);
        }
    }

    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        return format!("{}es", name);
    }

    format!("{}s", name)
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(s.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
