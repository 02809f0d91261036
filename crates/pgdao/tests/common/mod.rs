//! In-memory driver used by the behavioral tests.
//!
//! The mock models just enough engine behavior to observe the helper from the
//! outside: it counts opened connections, journals every event in order, and
//! only moves statements into `committed` when a transaction commits (or
//! immediately, outside a transaction). Failures are injected by statement
//! substring or on the transaction verbs.

#![allow(dead_code)]

use pgdao::{AccessError, AccessResult, Connection, ConnectionProvider, Cursor, Dao, Row};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
pub struct MockDb {
    /// Number of connections opened so far.
    pub opened: usize,
    /// Statements that are durably committed.
    pub committed: Vec<String>,
    /// Every event in order: OPEN, BEGIN, COMMIT, ROLLBACK, or statement text.
    pub journal: Vec<String>,
    /// Queued result sets, consumed one per query.
    pub result_sets: Vec<Vec<Row>>,
    /// Affected-row count reported per successful non-query statement.
    pub rows_affected: u64,
    /// Any statement containing this substring fails.
    pub fail_matching: Option<String>,
    pub fail_commit: bool,
    pub fail_rollback: bool,
}

#[derive(Clone)]
pub struct MockProvider {
    db: Rc<RefCell<MockDb>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            db: Rc::new(RefCell::new(MockDb {
                rows_affected: 1,
                ..MockDb::default()
            })),
        }
    }

    /// Shared handle for inspecting state after the fact.
    pub fn db(&self) -> Rc<RefCell<MockDb>> {
        Rc::clone(&self.db)
    }

    pub fn push_rows(&self, rows: Vec<Row>) {
        self.db.borrow_mut().result_sets.push(rows);
    }

    pub fn fail_matching(&self, needle: &str) {
        self.db.borrow_mut().fail_matching = Some(needle.to_string());
    }

    pub fn fail_commit(&self) {
        self.db.borrow_mut().fail_commit = true;
    }

    pub fn fail_rollback(&self) {
        self.db.borrow_mut().fail_rollback = true;
    }
}

impl ConnectionProvider for MockProvider {
    type Conn = MockConnection;

    fn open(&self) -> AccessResult<MockConnection> {
        let mut db = self.db.borrow_mut();
        db.opened += 1;
        db.journal.push("OPEN".to_string());
        Ok(MockConnection {
            db: Rc::clone(&self.db),
            pending: Vec::new(),
            in_tx: false,
        })
    }
}

pub struct MockConnection {
    db: Rc<RefCell<MockDb>>,
    pending: Vec<String>,
    in_tx: bool,
}

impl Connection for MockConnection {
    fn query(&mut self, sql: &str) -> AccessResult<Cursor> {
        let mut db = self.db.borrow_mut();
        if let Some(needle) = &db.fail_matching
            && sql.contains(needle.as_str())
        {
            return Err(AccessError::command(sql, "scripted failure"));
        }
        db.journal.push(sql.to_string());
        let rows = if db.result_sets.is_empty() {
            Vec::new()
        } else {
            db.result_sets.remove(0)
        };
        Ok(Cursor::new(rows))
    }

    fn execute(&mut self, sql: &str) -> AccessResult<u64> {
        let mut db = self.db.borrow_mut();
        if let Some(needle) = &db.fail_matching
            && sql.contains(needle.as_str())
        {
            return Err(AccessError::command(sql, "scripted failure"));
        }
        db.journal.push(sql.to_string());
        if self.in_tx {
            self.pending.push(sql.to_string());
        } else {
            db.committed.push(sql.to_string());
        }
        Ok(db.rows_affected)
    }

    fn begin(&mut self) -> AccessResult<()> {
        self.db.borrow_mut().journal.push("BEGIN".to_string());
        self.in_tx = true;
        Ok(())
    }

    fn commit(&mut self) -> AccessResult<()> {
        let mut db = self.db.borrow_mut();
        db.journal.push("COMMIT".to_string());
        if db.fail_commit {
            return Err(AccessError::command("COMMIT", "scripted commit failure"));
        }
        self.in_tx = false;
        db.committed.append(&mut self.pending);
        Ok(())
    }

    fn rollback(&mut self) -> AccessResult<()> {
        let mut db = self.db.borrow_mut();
        db.journal.push("ROLLBACK".to_string());
        if db.fail_rollback {
            return Err(AccessError::command("ROLLBACK", "scripted rollback failure"));
        }
        self.in_tx = false;
        self.pending.clear();
        Ok(())
    }
}

/// The demo record most tests persist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Person {
    pub fn named(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
        }
    }
}

pub fn person_dao(provider: MockProvider) -> Dao<Person, MockProvider> {
    Dao::new(provider, Person::default(), Person::default)
}
