// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence session contract.
//!
//! Generated CRUD traits require a single capability: access to a session
//! implementing [`PersistenceSession`] for their entity. The session owns
//! all I/O, query execution, locking and conflict detection; the generated
//! operations only sequence calls into it.
//!
//! # Implementing
//!
//! ```rust,ignore
//! impl<E: Entity + FromRow> PersistenceSession<E> for PgSession {
//!     type Error = sqlx::Error;
//!     type Predicate = Condition;
//!     type Order = OrderBy;
//!
//!     fn count(&mut self, query: CriteriaQuery<Condition, OrderBy>) -> Result<u64, sqlx::Error> {
//!         // SELECT COUNT(..) FROM .. WHERE ..
//!     }
//!
//!     // ...
//! }
//! ```

use crate::{CriteriaQuery, Entity, Identified, LockMode, TypedQuery};

/// Unit-of-work handle for one entity type.
///
/// Writes issued through `persist`, `merge` and `remove` become visible to
/// other readers no later than the next `flush`. Generated mutating
/// operations always flush before returning.
pub trait PersistenceSession<E: Entity> {
    /// Failure raised by the session, propagated unchanged by generated code.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Boolean query condition accepted by `count` and `list` contexts.
    type Predicate;

    /// Sort order accepted by `list` contexts.
    type Order;

    /// Execute a count query.
    fn count(&mut self, query: CriteriaQuery<Self::Predicate, Self::Order>)
    -> Result<u64, Self::Error>;

    /// Execute a select query, returning entities in query order.
    fn list(&mut self, query: TypedQuery<Self::Predicate, Self::Order>)
    -> Result<Vec<E>, Self::Error>;

    /// Look up an entity by identity under a lock mode.
    fn find(&mut self, id: &E::Id, lock_mode: LockMode) -> Result<Option<E>, Self::Error>
    where
        E: Identified;

    /// Make a new entity persistent.
    ///
    /// Generated values (identity, defaults) are written back into `entity`
    /// no later than the following `flush`.
    fn persist(&mut self, entity: &mut E) -> Result<(), Self::Error>;

    /// Write the state of a previously found entity back to the session.
    fn merge(&mut self, entity: &E) -> Result<(), Self::Error>
    where
        E: Identified;

    /// Remove a previously found entity.
    fn remove(&mut self, entity: &E) -> Result<(), Self::Error>
    where
        E: Identified;

    /// Synchronize pending writes with the store.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Error type of session `S` for entity `E`.
pub type SessionError<S, E> = <S as PersistenceSession<E>>::Error;

/// [`CountContext`](crate::CountContext) for session `S` and entity `E`.
pub type SessionCountContext<S, E> =
    crate::CountContext<<S as PersistenceSession<E>>::Predicate>;

/// [`ListContext`](crate::ListContext) for session `S` and entity `E`.
pub type SessionListContext<S, E> = crate::ListContext<
    <S as PersistenceSession<E>>::Predicate,
    <S as PersistenceSession<E>>::Order
>;
