use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use marquee_core::{DomainError, DomainResult, TheaterId};
use marquee_theaters::Theater;

/// CRUD primitives for theaters, keyed by id.
pub trait TheaterStore: Send + Sync {
    /// Persist a new theater, assigning its id. The caller validates first.
    fn insert(&self, theater: Theater) -> Theater;
    fn get(&self, id: TheaterId) -> Option<Theater>;
    fn list(&self) -> Vec<Theater>;
    /// Replace the stored record. `NotFound` if the id was never assigned or
    /// the record was deleted.
    fn update(&self, theater: Theater) -> DomainResult<Theater>;
    /// Remove immediately (no soft delete). `NotFound` on a second call.
    fn remove(&self, id: TheaterId) -> DomainResult<()>;
}

impl<S> TheaterStore for Arc<S>
where
    S: TheaterStore + ?Sized,
{
    fn insert(&self, theater: Theater) -> Theater {
        (**self).insert(theater)
    }

    fn get(&self, id: TheaterId) -> Option<Theater> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Theater> {
        (**self).list()
    }

    fn update(&self, theater: Theater) -> DomainResult<Theater> {
        (**self).update(theater)
    }

    fn remove(&self, id: TheaterId) -> DomainResult<()> {
        (**self).remove(id)
    }
}

/// In-memory theater store for dev/tests. Ids are sequential starting at 1.
#[derive(Debug)]
pub struct InMemoryTheaterStore {
    inner: RwLock<HashMap<TheaterId, Theater>>,
    next_id: AtomicI64,
}

impl InMemoryTheaterStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTheaterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TheaterStore for InMemoryTheaterStore {
    fn insert(&self, mut theater: Theater) -> Theater {
        let id = TheaterId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        theater.id = id;
        if let Ok(mut map) = self.inner.write() {
            map.insert(id, theater.clone());
        }
        theater
    }

    fn get(&self, id: TheaterId) -> Option<Theater> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn list(&self) -> Vec<Theater> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        let mut items: Vec<Theater> = map.values().cloned().collect();
        items.sort_by_key(|t| t.id);
        items
    }

    fn update(&self, theater: Theater) -> DomainResult<Theater> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::not_found())?;
        if !map.contains_key(&theater.id) {
            return Err(DomainError::not_found());
        }
        map.insert(theater.id, theater.clone());
        Ok(theater)
    }

    fn remove(&self, id: TheaterId) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::not_found())?;
        match map.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found()),
        }
    }
}
