// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory persistence session for tests and examples.
//!
//! Rows live in a `Vec`; predicates and orders are closures. Writes apply to
//! a working set that the session itself reads from, and `flush` publishes
//! the working set as the committed state. Every lock mode requested through
//! `find` or `list` is recorded so tests can assert on it.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut session = MemorySession::with_identity(|e: &mut Employee, seq| e.id = seq as i64);
//! let mut repo = Employees { session };
//!
//! let adults = repo.count(|ctx| {
//!     ctx.add_predicate(matches(|e: &Employee| e.age >= 18));
//! })?;
//! ```

use std::cmp::Ordering;

use thiserror::Error;

use crate::{CriteriaQuery, Entity, Identified, LockMode, PersistenceSession, TypedQuery};

/// Row filter understood by [`MemorySession`].
pub type MemoryPredicate<E> = Box<dyn Fn(&E) -> bool>;

/// Row comparator understood by [`MemorySession`].
pub type MemoryOrder<E> = Box<dyn Fn(&E, &E) -> Ordering>;

/// Build a predicate from a closure.
pub fn matches<E, F>(filter: F) -> MemoryPredicate<E>
where
    F: Fn(&E) -> bool + 'static
{
    Box::new(filter)
}

/// Order rows by ascending key.
pub fn ascending<E, K, F>(key: F) -> MemoryOrder<E>
where
    K: Ord,
    F: Fn(&E) -> K + 'static
{
    Box::new(move |a, b| key(a).cmp(&key(b)))
}

/// Order rows by descending key.
pub fn descending<E, K, F>(key: F) -> MemoryOrder<E>
where
    K: Ord,
    F: Fn(&E) -> K + 'static
{
    Box::new(move |a, b| key(b).cmp(&key(a)))
}

/// Failure raised by [`MemorySession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// `merge` or `remove` targeted a row the session does not hold.
    #[error("{0} is not managed by this session")]
    Detached(&'static str),

    /// Failure queued with [`MemorySession::fail_next`].
    #[error("injected failure: {0}")]
    Injected(&'static str)
}

/// Vector-backed [`PersistenceSession`].
pub struct MemorySession<E: Entity> {
    committed: Vec<E>,
    working:   Vec<E>,
    sequence:  u64,
    assign:    Option<fn(&mut E, u64)>,
    locks:     Vec<LockMode>,
    flushes:   usize,
    failure:   Option<MemoryError>
}

impl<E: Entity> Default for MemorySession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemorySession<E> {
    /// Session for entities without generated identity.
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            working:   Vec::new(),
            sequence:  0,
            assign:    None,
            locks:     Vec::new(),
            flushes:   0,
            failure:   None
        }
    }

    /// Session that assigns `1, 2, 3, ...` through `assign` on persist.
    pub fn with_identity(assign: fn(&mut E, u64)) -> Self {
        Self {
            assign: Some(assign),
            ..Self::new()
        }
    }

    /// Committed rows, as of the last flush.
    pub fn committed(&self) -> &[E] {
        &self.committed
    }

    /// Rows visible inside this session, including unflushed writes.
    pub fn rows(&self) -> &[E] {
        &self.working
    }

    /// Lock modes requested so far, in call order.
    pub fn lock_modes(&self) -> &[LockMode] {
        &self.locks
    }

    /// Number of completed flushes.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Make the next session call fail with `reason`.
    pub fn fail_next(&mut self, reason: &'static str) {
        self.failure = Some(MemoryError::Injected(reason));
    }

    fn check(&mut self) -> Result<(), MemoryError> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(())
        }
    }

    fn position(&self, entity: &E) -> Result<usize, MemoryError>
    where
        E: Identified
    {
        let id = entity.identity();
        self.working
            .iter()
            .position(|row| id.is_some() && row.identity() == id)
            .ok_or(MemoryError::Detached(E::NAME))
    }
}

impl<E: Entity + PartialEq> MemorySession<E> {
    fn select(&self, distinct: bool, predicates: &[MemoryPredicate<E>]) -> Vec<E> {
        let mut rows: Vec<E> = Vec::new();
        for row in &self.working {
            if !predicates.iter().all(|p| p(row)) {
                continue;
            }
            if distinct && rows.contains(row) {
                continue;
            }
            rows.push(row.clone());
        }
        rows
    }
}

impl<E: Entity + PartialEq> PersistenceSession<E> for MemorySession<E> {
    type Error = MemoryError;
    type Predicate = MemoryPredicate<E>;
    type Order = MemoryOrder<E>;

    fn count(
        &mut self,
        query: CriteriaQuery<MemoryPredicate<E>, MemoryOrder<E>>
    ) -> Result<u64, MemoryError> {
        self.check()?;
        let distinct = query.is_distinct();
        let rows = self.select(distinct, query.predicates());
        Ok(rows.len() as u64)
    }

    fn list(
        &mut self,
        query: TypedQuery<MemoryPredicate<E>, MemoryOrder<E>>
    ) -> Result<Vec<E>, MemoryError> {
        self.check()?;
        if let Some(lock_mode) = query.lock_mode() {
            self.locks.push(lock_mode);
        }

        let criteria = query.criteria();
        let mut rows = self.select(criteria.is_distinct(), criteria.predicates());
        let orders = criteria.orders();
        rows.sort_by(|a, b| {
            orders
                .iter()
                .map(|order| order(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        let skip = query.first_result().unwrap_or(0);
        let take = query.max_results().unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    fn find(&mut self, id: &E::Id, lock_mode: LockMode) -> Result<Option<E>, MemoryError>
    where
        E: Identified
    {
        self.check()?;
        self.locks.push(lock_mode);
        Ok(self
            .working
            .iter()
            .find(|row| row.identity() == Some(id))
            .cloned())
    }

    fn persist(&mut self, entity: &mut E) -> Result<(), MemoryError> {
        self.check()?;
        if let Some(assign) = self.assign {
            self.sequence += 1;
            assign(entity, self.sequence);
        }
        self.working.push(entity.clone());
        Ok(())
    }

    fn merge(&mut self, entity: &E) -> Result<(), MemoryError>
    where
        E: Identified
    {
        self.check()?;
        let index = self.position(entity)?;
        self.working[index] = entity.clone();
        Ok(())
    }

    fn remove(&mut self, entity: &E) -> Result<(), MemoryError>
    where
        E: Identified
    {
        self.check()?;
        let index = self.position(entity)?;
        self.working.remove(index);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MemoryError> {
        self.check()?;
        self.committed = self.working.clone();
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Tag {
        id:    i64,
        label: String
    }

    impl Entity for Tag {
        const NAME: &'static str = "Tag";
    }

    impl Identified for Tag {
        type Id = i64;

        fn identity(&self) -> Option<&i64> {
            Some(&self.id)
        }
    }

    fn tag(label: &str) -> Tag {
        Tag {
            id:    0,
            label: label.to_string()
        }
    }

    fn session_with(labels: &[&str]) -> MemorySession<Tag> {
        let mut session = MemorySession::with_identity(|t: &mut Tag, seq| t.id = seq as i64);
        for label in labels {
            session.persist(&mut tag(label)).unwrap();
        }
        session.flush().unwrap();
        session
    }

    #[test]
    fn persist_assigns_sequence() {
        let session = session_with(&["a", "b"]);
        let ids: Vec<i64> = session.committed().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn writes_are_committed_on_flush() {
        let mut session = session_with(&[]);
        session.persist(&mut tag("a")).unwrap();
        assert_eq!(session.rows().len(), 1);
        assert!(session.committed().is_empty());
        session.flush().unwrap();
        assert_eq!(session.committed().len(), 1);
        assert_eq!(session.flush_count(), 2);
    }

    #[test]
    fn list_sorts_and_paginates() {
        let mut session = session_with(&["d", "b", "a", "c"]);
        let mut criteria = CriteriaQuery::select();
        criteria.order_by(vec![ascending(|t: &Tag| t.label.clone())]);
        let mut query = TypedQuery::new(criteria);
        query.set_first_result(1).set_max_results(2);

        let labels: Vec<String> = session
            .list(query)
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["b", "c"]);
    }

    #[test]
    fn descending_order() {
        let mut session = session_with(&["a", "c", "b"]);
        let mut criteria = CriteriaQuery::select();
        criteria.order_by(vec![descending(|t: &Tag| t.label.clone())]);
        let rows = session.list(TypedQuery::new(criteria)).unwrap();
        assert_eq!(rows[0].label, "c");
        assert_eq!(rows[2].label, "a");
    }

    #[test]
    fn count_applies_predicates() {
        let mut session = session_with(&["a", "b", "ab"]);
        let mut criteria = CriteriaQuery::count();
        criteria.restrict(vec![matches(|t: &Tag| t.label.contains('a'))]);
        assert_eq!(session.count(criteria).unwrap(), 2);
    }

    #[test]
    fn find_records_lock_mode() {
        let mut session = session_with(&["a"]);
        let found = session.find(&1, LockMode::PessimisticWrite).unwrap();
        assert_eq!(found.map(|t| t.label), Some("a".to_string()));
        assert_eq!(session.find(&9, LockMode::None).unwrap(), None);
        assert_eq!(session.lock_modes(), &[LockMode::PessimisticWrite, LockMode::None]);
    }

    #[test]
    fn merge_and_remove_require_managed_rows() {
        let mut session = session_with(&["a"]);
        let stranger = Tag {
            id:    42,
            label: "x".to_string()
        };
        assert_eq!(session.merge(&stranger), Err(MemoryError::Detached("Tag")));
        assert_eq!(session.remove(&stranger), Err(MemoryError::Detached("Tag")));

        let mut managed = session.find(&1, LockMode::None).unwrap().unwrap();
        managed.label = "renamed".to_string();
        session.merge(&managed).unwrap();
        assert_eq!(session.rows()[0].label, "renamed");
        session.remove(&managed).unwrap();
        assert!(session.rows().is_empty());
    }

    #[test]
    fn injected_failure_fires_once() {
        let mut session = session_with(&[]);
        session.fail_next("disk full");
        assert_eq!(session.flush(), Err(MemoryError::Injected("disk full")));
        assert_eq!(session.flush(), Ok(()));
    }
}
