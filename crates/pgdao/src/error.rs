//! Error types for pgdao

use crate::transaction::TxState;
use thiserror::Error;

/// Result type alias for pgdao operations
pub type AccessResult<T> = Result<T, AccessError>;

/// Error types for data-access operations
#[derive(Debug, Error)]
pub enum AccessError {
    /// A physical connection could not be acquired or opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution failed
    #[error("Command error on statement [{sql}]: {message}")]
    Command { sql: String, message: String },

    /// A requested column's value is absent
    #[error("Column '{column}' field is null")]
    NullField { column: String },

    /// A column value could not be converted to the requested type
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// A write statement was rejected by the safety guard
    #[error("Non-secure SQL statement: [{sql}]")]
    Validation { sql: String },

    /// Commit or rollback was invoked in the wrong transaction state
    #[error("Cannot {operation}: transaction is {state}")]
    TransactionState {
        operation: &'static str,
        state: TxState,
    },

    /// A best-effort rollback after an earlier failure also failed
    #[error("Rollback failed: {rollback} (after: {source})")]
    RollbackFailed {
        rollback: String,
        #[source]
        source: Box<AccessError>,
    },
}

impl AccessError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a command error carrying the offending statement text
    pub fn command(sql: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Command {
            sql: sql.into(),
            message: message.into(),
        }
    }

    /// Create a null-field error for a specific column
    pub fn null_field(column: impl Into<String>) -> Self {
        Self::NullField {
            column: column.into(),
        }
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a validation error carrying the rejected statement text
    pub fn validation(sql: impl Into<String>) -> Self {
        Self::Validation { sql: sql.into() }
    }

    /// Wrap a failed rollback around the failure that triggered it
    pub(crate) fn rollback_failed(rollback: impl Into<String>, source: AccessError) -> Self {
        Self::RollbackFailed {
            rollback: rollback.into(),
            source: Box::new(source),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a null-field error
    pub fn is_null_field(&self) -> bool {
        matches!(self, Self::NullField { .. })
    }

    /// Check if this is a transaction-state error
    pub fn is_transaction_state(&self) -> bool {
        matches!(self, Self::TransactionState { .. })
    }
}
