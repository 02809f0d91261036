//! Explicit caller-controlled transactions.
//!
//! By default every write runs in its own ephemeral transaction on a dedicated
//! connection. A caller that needs several operations to commit or fail as one
//! unit begins an explicit transaction instead: the manager then holds a single
//! open connection that all writes route through until `commit` or `rollback`
//! releases it.

use crate::error::{AccessError, AccessResult};
use crate::provider::Connection;
use std::fmt;

/// Externally observable transaction state of a helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxState {
    /// No explicit transaction; writes use ephemeral per-call transactions.
    Idle,
    /// An explicit transaction is open; writes route through its connection.
    Active,
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Active => "active",
        })
    }
}

/// Tracks the single explicit transaction a helper may hold.
///
/// Lifecycle: `Idle -> Active -> (committed | rolled back) -> Idle`. While
/// `Active` the manager owns one connection with one open transaction; commit
/// and rollback both release that connection, whatever their outcome. There is
/// no timeout: an abandoned `Active` context holds its connection until the
/// manager is dropped.
pub struct TransactionManager<C: Connection> {
    context: Option<C>,
}

impl<C: Connection> TransactionManager<C> {
    pub(crate) fn new() -> Self {
        Self { context: None }
    }

    /// Current state.
    pub fn state(&self) -> TxState {
        if self.context.is_some() {
            TxState::Active
        } else {
            TxState::Idle
        }
    }

    /// Whether an explicit transaction is open.
    pub fn is_active(&self) -> bool {
        self.context.is_some()
    }

    /// Open a connection via `open` and start a transaction on it.
    ///
    /// A no-op when already `Active`: a second begin never opens a second
    /// connection.
    pub(crate) fn begin(&mut self, open: impl FnOnce() -> AccessResult<C>) -> AccessResult<()> {
        if self.context.is_some() {
            return Ok(());
        }
        let mut conn = open()?;
        conn.begin()?;
        self.context = Some(conn);
        Ok(())
    }

    /// Commit the active transaction.
    ///
    /// Fails with a transaction-state error when `Idle`. On commit failure a
    /// rollback is attempted: if it succeeds the commit error surfaces, if it
    /// also fails the rollback error surfaces with the commit error as its
    /// source. The connection is released on every path.
    pub(crate) fn commit(&mut self) -> AccessResult<()> {
        let mut conn = self.context.take().ok_or(AccessError::TransactionState {
            operation: "commit",
            state: TxState::Idle,
        })?;
        match conn.commit() {
            Ok(()) => Ok(()),
            Err(commit_err) => match conn.rollback() {
                Ok(()) => {
                    tracing::warn!("commit failed, transaction rolled back");
                    Err(commit_err)
                }
                Err(rollback_err) => {
                    Err(AccessError::rollback_failed(rollback_err.to_string(), commit_err))
                }
            },
        }
    }

    /// Roll back the active transaction.
    ///
    /// Fails with a transaction-state error when `Idle`. The connection is
    /// released on every path.
    pub(crate) fn rollback(&mut self) -> AccessResult<()> {
        let mut conn = self.context.take().ok_or(AccessError::TransactionState {
            operation: "rollback",
            state: TxState::Idle,
        })?;
        conn.rollback()
    }

    /// The shared connection while `Active`.
    pub(crate) fn connection(&mut self) -> Option<&mut C> {
        self.context.as_mut()
    }
}
