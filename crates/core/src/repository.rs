//! In-memory repository: one store per entity kind.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::SequentialId;

/// In-memory store for one entity kind, keyed by sequentially issued ids.
///
/// Ids start at 1 and are never reused, even after a removal. Because ids only
/// grow, ordering by id is the same as insertion order, which is the order
/// [`Repository::list`] yields.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: BTreeMap<T::Id, T>,
    next_id: i64,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Id the next [`add`](Self::add) will issue.
    pub fn next_id(&self) -> T::Id {
        T::Id::from_raw(self.next_id)
    }

    /// Issue the next id, build the entity from `draft` and store it.
    pub fn add(&mut self, draft: T::Draft) -> T::Id {
        let id = self.next_id();
        self.next_id += 1;
        self.items.insert(id, T::from_draft(id, draft));
        tracing::debug!(kind = T::KIND, %id, "entity added");
        id
    }

    /// Remove and return the entity stored under `id`.
    ///
    /// Absent ids, including ids that could never have been issued, yield
    /// [`DomainError::NotFound`] and leave the repository untouched.
    pub fn remove(&mut self, id: T::Id) -> DomainResult<T> {
        if !id.is_issuable() {
            return Err(DomainError::not_found());
        }
        let removed = self.items.remove(&id).ok_or_else(DomainError::not_found)?;
        tracing::debug!(kind = T::KIND, %id, "entity removed");
        Ok(removed)
    }

    pub fn find(&self, id: T::Id) -> DomainResult<&T> {
        if !id.is_issuable() {
            return Err(DomainError::not_found());
        }
        self.items.get(&id).ok_or_else(DomainError::not_found)
    }

    /// First entity, in insertion order, matching `predicate`.
    pub fn find_by<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.values().find(|item| predicate(item))
    }

    /// All stored entities in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
