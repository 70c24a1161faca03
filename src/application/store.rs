//! # Application Store
//!
//! In-memory record store, seeded once at startup. The store is an
//! explicitly owned value injected into the service layer rather than
//! ambient module state, so tests can run against isolated instances.
//!
//! A single `RwLock` guards both the record list and the id counter, which
//! keeps scan-then-mutate and increment-then-append sequences atomic under
//! the multi-threaded server runtime.

use std::sync::RwLock;

use thiserror::Error;

use super::model::{Application, NewApplication, Status};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures.
///
/// Nothing in the in-memory implementation fails per-call except a
/// poisoned lock; the variant exists so callers translate unexpected
/// faults into the internal-error outcome instead of panicking.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("application store lock poisoned")]
    LockPoisoned,
}

struct StoreInner {
    records: Vec<Application>,
    last_id: u64,
}

/// In-memory holder of all application records.
pub struct ApplicationStore {
    inner: RwLock<StoreInner>,
}

impl ApplicationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store seeded with already-deduplicated records.
    ///
    /// The id counter starts at the maximum numeric id present, so ids
    /// assigned later never collide with seed data.
    pub fn with_records(records: Vec<Application>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|app| app.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            inner: RwLock::new(StoreInner { records, last_id }),
        }
    }

    /// Snapshot of all current records, in store order.
    pub fn find_all(&self) -> StoreResult<Vec<Application>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.clone())
    }

    /// Look up a record by id. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Application>> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.iter().find(|app| app.id == id).cloned())
    }

    /// Number of records currently held.
    pub fn len(&self) -> StoreResult<usize> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.len())
    }

    /// Create a record with the next monotonic id and default status.
    ///
    /// The counter is process-lifetime monotonic: ids are never reused,
    /// even after deletions.
    pub fn create(&self, fields: NewApplication) -> StoreResult<Application> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        inner.last_id += 1;
        let application = Application {
            id: inner.last_id.to_string(),
            name: fields.name,
            description: fields.description,
            status: Status::default(),
        };

        inner.records.push(application.clone());
        Ok(application)
    }

    /// Replace the record with the given id wholesale.
    ///
    /// Replacing the slot (rather than mutating fields in place) means
    /// previously returned snapshots never observe the change. Silently a
    /// no-op when the id is missing; callers wanting a not-found signal
    /// must check existence first.
    pub fn update(&self, id: &str, updated: Application) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if let Some(index) = inner.records.iter().position(|app| app.id == id) {
            inner.records[index] = updated;
        }
        Ok(())
    }

    /// Remove the record with the given id. Same silent no-op contract as
    /// [`update`](Self::update) when the id is missing.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if let Some(index) = inner.records.iter().position(|app| app.id == id) {
            inner.records.remove(index);
        }
        Ok(())
    }
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}
