//! Result rows and the forward-only cursor.

use crate::error::{AccessError, AccessResult};
use crate::value::{FromValue, Value};

/// One result row: column names paired with their decoded values.
///
/// Reader callbacks pull typed fields off a row by name:
///
/// ```
/// use pgdao::Row;
///
/// let row = Row::new().with("id", 7i64).with("name", "alice");
/// let id: i64 = row.try_get("id").unwrap();
/// assert_eq!(id, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Append a column, chaining style.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The raw value of a column, if the column exists.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Resolve a column by name and convert it to `U`.
    ///
    /// A column holding SQL `NULL` is an error naming the column, never a
    /// zero-value substitution. Use [`Row::try_get_opt`] for columns that are
    /// legitimately nullable.
    pub fn try_get<U: FromValue>(&self, column: &str) -> AccessResult<U> {
        let value = self
            .value(column)
            .ok_or_else(|| AccessError::decode(column, "no such column in result row"))?;
        if value.is_null() {
            return Err(AccessError::null_field(column));
        }
        U::from_value(value).ok_or_else(|| {
            AccessError::decode(
                column,
                format!("expected {}, got {}", U::EXPECTED, value.type_name()),
            )
        })
    }

    /// Resolve a column by name, mapping SQL `NULL` to `None`.
    pub fn try_get_opt<U: FromValue>(&self, column: &str) -> AccessResult<Option<U>> {
        let value = self
            .value(column)
            .ok_or_else(|| AccessError::decode(column, "no such column in result row"))?;
        if value.is_null() {
            return Ok(None);
        }
        U::from_value(value)
            .map(Some)
            .ok_or_else(|| {
                AccessError::decode(
                    column,
                    format!("expected {}, got {}", U::EXPECTED, value.type_name()),
                )
            })
    }
}

/// Forward-only, single-pass cursor over the rows of one read operation.
///
/// Owned by the helper for the duration of that operation; advancing via the
/// `Iterator` impl is the only way to move between rows.
#[derive(Debug)]
pub struct Cursor {
    rows: std::vec::IntoIter<Row>,
}

impl Cursor {
    /// Wrap a materialized result set.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }

    /// A cursor over no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Iterator for Cursor {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.next()
    }
}
