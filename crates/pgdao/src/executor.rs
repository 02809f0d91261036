//! Write-statement dispatch strategies.
//!
//! A write either runs on a dedicated connection opened for that one call, or
//! on the connection of the helper's explicit transaction. Both paths sit
//! behind [`StatementRunner`] so the operation code stays strategy-agnostic;
//! the helper picks the strategy from its transaction state at each entry
//! point.

use crate::error::{AccessError, AccessResult};
use crate::provider::Connection;

/// One write dispatch path.
pub(crate) trait StatementRunner {
    /// Execute a single non-query statement.
    fn run_single(&mut self, sql: &str) -> AccessResult<u64>;

    /// Execute lazily produced statements in order, summing affected rows.
    ///
    /// Statements arrive as results so that building or validating a later
    /// statement can still fail after earlier ones executed.
    fn run_batch(
        &mut self,
        statements: &mut dyn Iterator<Item = AccessResult<String>>,
    ) -> AccessResult<u64>;
}

/// Runs writes on a dedicated connection opened for this one call.
///
/// Single statements execute under the engine's implicit statement
/// transaction. Batches are all-or-nothing: one transaction around the whole
/// sequence, committed only if every statement succeeds. The connection is
/// released when the runner drops, on every exit path.
pub(crate) struct EphemeralRunner<C: Connection> {
    conn: C,
}

impl<C: Connection> EphemeralRunner<C> {
    pub(crate) fn new(conn: C) -> Self {
        Self { conn }
    }
}

impl<C: Connection> StatementRunner for EphemeralRunner<C> {
    fn run_single(&mut self, sql: &str) -> AccessResult<u64> {
        tracing::debug!(statement = sql, routing = "ephemeral", "executing write");
        self.conn.execute(sql)
    }

    fn run_batch(
        &mut self,
        statements: &mut dyn Iterator<Item = AccessResult<String>>,
    ) -> AccessResult<u64> {
        self.conn.begin()?;
        let mut affected = 0;
        for statement in statements {
            let outcome = statement.and_then(|sql| {
                tracing::debug!(statement = %sql, routing = "ephemeral", "executing batch write");
                self.conn.execute(&sql)
            });
            match outcome {
                Ok(rows) => affected += rows,
                Err(error) => {
                    tracing::warn!("batch write failed, rolling back");
                    return match self.conn.rollback() {
                        Ok(()) => Err(error),
                        Err(rollback_err) => {
                            Err(AccessError::rollback_failed(rollback_err.to_string(), error))
                        }
                    };
                }
            }
        }
        if let Err(commit_err) = self.conn.commit() {
            return match self.conn.rollback() {
                Ok(()) => Err(commit_err),
                Err(rollback_err) => {
                    Err(AccessError::rollback_failed(rollback_err.to_string(), commit_err))
                }
            };
        }
        Ok(affected)
    }
}

/// Runs writes on the explicit-transaction connection.
///
/// The caller owns the transaction boundary: no begin, commit, or rollback
/// happens here, and the first failure simply propagates with the transaction
/// still open.
pub(crate) struct SharedRunner<'a, C: Connection> {
    conn: &'a mut C,
}

impl<'a, C: Connection> SharedRunner<'a, C> {
    pub(crate) fn new(conn: &'a mut C) -> Self {
        Self { conn }
    }
}

impl<C: Connection> StatementRunner for SharedRunner<'_, C> {
    fn run_single(&mut self, sql: &str) -> AccessResult<u64> {
        tracing::debug!(statement = sql, routing = "explicit", "executing write");
        self.conn.execute(sql)
    }

    fn run_batch(
        &mut self,
        statements: &mut dyn Iterator<Item = AccessResult<String>>,
    ) -> AccessResult<u64> {
        let mut affected = 0;
        for statement in statements {
            let sql = statement?;
            tracing::debug!(statement = %sql, routing = "explicit", "executing batch write");
            affected += self.conn.execute(&sql)?;
        }
        Ok(affected)
    }
}
