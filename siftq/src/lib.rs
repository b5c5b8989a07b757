//! SIFTQ - Query grammar for tablesift
//!
//! A tiny query language for searchable data tables: a raw input string is
//! split into **filter tokens** and **free-text terms**.
//!
//! # Syntax Overview
//!
//! ```siftq
//! -- plain free-text search
//! alice johnson
//!
//! -- apply the named filter `active`, then search for "alice"
//! active: alice
//!
//! -- filters and terms mix freely; order among terms is preserved
//! alice active: johnson vip:
//! ```
//!
//! A token is a filter token only when it is one or more word characters
//! followed by exactly one trailing colon and nothing else (`active:`).
//! Anything else - including `a:b`, `foo::`, or a bare `:` - is a term.
//!
//! Parsing never fails: malformed filter syntax is not an error, it simply
//! contributes a search term.

mod parser;
mod query;

pub use query::Query;

/// Parse a raw query string into a [`Query`]
pub fn parse(input: &str) -> Query {
    parser::parse_query(input)
}
