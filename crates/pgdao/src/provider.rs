//! Connection seam between the helper and a concrete driver.
//!
//! The helper never talks to a client library directly; it opens connections
//! through a [`ConnectionProvider`] and executes statements through the
//! [`Connection`] trait. The bundled PostgreSQL driver lives in [`crate::pg`];
//! tests substitute an in-memory implementation behind the same seam.

use crate::error::AccessResult;
use crate::row::Cursor;

/// Yields ready-to-use connections bound to a fixed target and credentials.
///
/// Providers carry static configuration only; there is no dynamic
/// reconfiguration and no pooling at this layer. A pooling provider, if
/// desired, implements this trait on top of its pool.
pub trait ConnectionProvider {
    /// Connection handle type produced by this provider.
    type Conn: Connection;

    /// Open a new physical connection.
    fn open(&self) -> AccessResult<Self::Conn>;
}

/// An open connection the helper executes statements on.
///
/// Transaction control is exposed as verbs on the connection itself rather
/// than as a borrowing wrapper type, so one owner can hold both the
/// connection and its transaction state across calls. Dropping a connection
/// releases it; a dropped connection with an open transaction is rolled back
/// by the server.
pub trait Connection {
    /// Execute a query and return its rows as a forward-only cursor.
    fn query(&mut self, sql: &str) -> AccessResult<Cursor>;

    /// Execute a non-query statement, returning the affected row count.
    fn execute(&mut self, sql: &str) -> AccessResult<u64>;

    /// Start a transaction on this connection.
    fn begin(&mut self) -> AccessResult<()>;

    /// Commit the current transaction.
    fn commit(&mut self) -> AccessResult<()>;

    /// Roll back the current transaction.
    fn rollback(&mut self) -> AccessResult<()>;
}
