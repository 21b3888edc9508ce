//! Record storage behind the query engine.
//!
//! The engine only reads: it borrows the full collection for each
//! evaluation. Each collection carries a process-unique source id and a
//! generation counter bumped by writers; derived data such as
//! [`crate::options::OptionCache`] keys on both to tell when it is stale.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{Error, Result};
use crate::record::Record;

/// Read access to a record collection plus a change counter.
pub trait Repository {
    type Record: Record;

    /// Every record, in insertion order.
    fn all(&self) -> &[Self::Record];

    fn get(&self, id: &str) -> Option<&Self::Record>;

    /// Identity of this collection, distinct from every other live one.
    fn source_id(&self) -> u64;

    /// Incremented on every successful write.
    fn generation(&self) -> u64;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

fn next_source_id() -> u64 {
    NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Vector-backed repository with an id index.
#[derive(Debug)]
pub struct InMemoryRepository<R> {
    records: Vec<R>,
    index: HashMap<String, usize>,
    source_id: u64,
    generation: u64,
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            source_id: next_source_id(),
            generation: 0,
        }
    }
}

// Clones take a fresh source id.
impl<R: Clone> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            index: self.index.clone(),
            source_id: next_source_id(),
            generation: self.generation,
        }
    }
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `records`, rejecting duplicate ids.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    /// Add a record; ids must be unique.
    pub fn insert(&mut self, record: R) -> Result<()> {
        let id = record.id().to_string();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateRecord(id));
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        self.generation += 1;
        Ok(())
    }

    /// Replace the record with the same id, returning the previous one.
    pub fn update(&mut self, record: R) -> Option<R> {
        let position = *self.index.get(record.id())?;
        self.generation += 1;
        Some(std::mem::replace(&mut self.records[position], record))
    }

    /// Remove a record by id.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let position = self.index.remove(id)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        self.generation += 1;
        Some(removed)
    }
}

impl<R: Record> Repository for InMemoryRepository<R> {
    type Record = R;

    fn all(&self) -> &[R] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    fn source_id(&self) -> u64 {
        self.source_id
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
