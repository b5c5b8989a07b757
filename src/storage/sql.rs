//! Translating a predicate into parameterized SQL
//!
//! The predicate is storage-agnostic; this adapter renders it into the
//! `(template, bound values)` pair that a SQL host hands to its
//! `where(template, values...)` primitive. Identifier quoting is the
//! dialect's business; values are never interpolated into the template.

use crate::search::predicate::{MatchOp, Predicate};

/// Identifier quoting rules for one SQL dialect
pub trait SqlDialect {
    fn quote_table_name(&self, raw: &str) -> String {
        quote_ansi(raw)
    }

    fn quote_column_name(&self, raw: &str) -> String {
        quote_ansi(raw)
    }
}

/// Standard double-quote identifier quoting
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl SqlDialect for AnsiDialect {}

fn quote_ansi(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

impl MatchOp {
    /// Render one comparison clause over an already-quoted qualified column
    fn render(&self, qualified: &str) -> String {
        match self {
            MatchOp::Equals => format!("{} = ?", qualified),
            MatchOp::ContainsInsensitive => {
                format!("LOWER(CAST({} AS CHAR(256))) LIKE ?", qualified)
            }
        }
    }
}

/// Render the predicate into an OR-combined template plus its bound values.
///
/// Clauses appear in the predicate's emission order and the value list is
/// read off the same comparisons, so placeholder count and value count
/// always agree.
pub fn to_sql(predicate: &Predicate, dialect: &dyn SqlDialect) -> (String, Vec<String>) {
    let template = predicate
        .comparisons
        .iter()
        .map(|c| {
            let qualified = format!(
                "{}.{}",
                dialect.quote_table_name(&c.column.table),
                dialect.quote_column_name(&c.column.column),
            );
            c.op.render(&qualified)
        })
        .collect::<Vec<_>>()
        .join(" OR ");

    let values = predicate
        .comparisons
        .iter()
        .map(|c| c.value.clone())
        .collect();

    (template, values)
}
