//! TABLESIFT - Attribute-driven search for tabular data browsers
//!
//! Given a free-text query string, tablesift separates structured filter
//! tokens from search terms, builds an OR-combined multi-field match across
//! a primary entity and its related entities, and applies named filter
//! predicates to the result.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        tablesift                               │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌──────────────┐   ┌────────────────────┐   │
//! │  │   SIFTQ     │   │  Dashboard   │   │  Filter Registry   │   │
//! │  │   Parser    │   │ (Attributes) │   │ (Named Predicates) │   │
//! │  └──────┬──────┘   └──────┬───────┘   └─────────┬──────────┘   │
//! │         │                 │                     │              │
//! │         ▼                 ▼                     ▼              │
//! │  ┌────────────────────────────────────────────────────────────┐│
//! │  │                    Search Engine                           ││
//! │  │  (blank check → predicate build → execute → filters)       ││
//! │  └──────────────────────────┬─────────────────────────────────┘│
//! │                             │                                  │
//! │                             ▼                                  │
//! │  ┌────────────────────────────────────────────────────────────┐│
//! │  │                Predicate (joins + comparisons)             ││
//! │  │  ordered clauses, one bound value per clause               ││
//! │  └──────────────────────────┬─────────────────────────────────┘│
//! │                             │                                  │
//! │                             ▼                                  │
//! │  ┌────────────────────────────────────────────────────────────┐│
//! │  │              Storage Collaborator (external)               ││
//! │  │  ScopedCollection: join / matching, lazily executed        ││
//! │  │  adapters: parameterized SQL, in-memory rows               ││
//! │  └────────────────────────────────────────────────────────────┘│
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tablesift::storage::memory::{MemoryCollection, MemoryRow};
//! use tablesift::{Attribute, Dashboard};
//!
//! let dashboard: Dashboard<MemoryCollection> = Dashboard::new("users")
//!     .attribute(Attribute::scalar("name"))
//!     .filter("active", |c: MemoryCollection| {
//!         c.retain(|row| row.get("active") == Some("true"))
//!     });
//!
//! let mut users = MemoryCollection::new("users");
//! users.insert(MemoryRow::new("u1").set("name", "Alice").set("active", "true"));
//! users.insert(MemoryRow::new("u2").set("name", "alina").set("active", "false"));
//!
//! let result = tablesift::run(users, &dashboard, "ali active:");
//! assert_eq!(result.ids(), ["u1"]);
//! ```

pub mod dashboard;
pub mod error;
pub mod filters;
pub mod search;
pub mod storage;

pub use error::{Error, Result};

pub use dashboard::{Attribute, AttributeKind, Dashboard, SearchMode};
pub use filters::FilterRegistry;
pub use search::predicate::{Comparison, Join, MatchOp, Predicate, QualifiedColumn};
pub use search::{run, SearchEngine};
pub use siftq::Query;
pub use storage::ScopedCollection;
