//! Heuristic safety guard for UPDATE and DELETE statements.
//!
//! The guard refuses UPDATE/DELETE statements that do not carry a qualifying
//! WHERE condition, so a builder bug cannot silently rewrite or empty a whole
//! table. It is a regular-expression heuristic, not a SQL parser, and it is
//! not a security boundary: a statement can be syntactically valid yet slip
//! past it (an operator hidden inside a comment or an unusual literal), and a
//! safe statement can be refused (a WHERE clause using only `IS NULL` /
//! `IS NOT NULL` has no comparison operator and fails the check). Callers who
//! hit a false reject opt out through the `_unchecked` entry points.

use crate::error::{AccessError, AccessResult};
use regex::Regex;
use std::sync::OnceLock;

/// Requires, in order: `UPDATE ... SET` or `DELETE FROM`, a `WHERE` keyword,
/// and at least one comparison operator or `BETWEEN`/`LIKE`/`IN (` whose
/// immediately preceding character is not a single quote.
const SENSITIVE_SQL: &str = r"(?i)[ ]*(UPDATE\s+.+\s+SET|DELETE\s+FROM)\s+.+\s+WHERE\s+.+[^'](=|<>|!=|>|<|>=|<=|\s+([ ]*|NOT\s+)BETWEEN\s+|\s+([ ]*|NOT\s+)LIKE\s+|\s+([ ]*|NOT\s+)IN[ ]*\()";

fn sensitive_sql() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SENSITIVE_SQL).expect("invalid built-in guard regex"))
}

/// Validate an UPDATE or DELETE statement.
///
/// Line breaks are normalized to spaces before matching. On rejection the
/// error embeds the original statement text.
pub fn validate(sql: &str) -> AccessResult<()> {
    let flattened = sql.replace(['\n', '\r'], " ");
    if sensitive_sql().is_match(&flattened) {
        Ok(())
    } else {
        Err(AccessError::validation(sql))
    }
}
