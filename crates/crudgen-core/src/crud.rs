// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared CRUD procedures behind every generated `{Entity}Crud` trait.
//!
//! Generated default methods delegate here, so each operation is defined
//! once for all entities. Every procedure is a single linear sequence of
//! session calls with no retries; failures surface immediately.
//!
//! # Operations
//!
//! | Function | Sequence |
//! |----------|----------|
//! | [`count`] | configure → count shape → distinct → predicates → execute |
//! | [`list`] | configure → select shape → distinct → predicates → orders → pagination → lock → execute → copy all |
//! | [`try_find`] | find → copy all |
//! | [`create`] | default entity → copy insert → persist → flush → copy all |
//! | [`try_update`] | find → copy update → merge → flush → copy all |
//! | [`try_delete`] | find → remove → flush |
//!
//! [`find`], [`update`] and [`delete`] turn a miss into
//! [`CrudError::NotFound`].

use tracing::debug;

use crate::{
    CountContext, CriteriaQuery, CrudError, CrudResult, Entity, Identified, IdentifiedTransfer,
    ListContext, LockMode, PersistenceSession, TransferObject, TypedQuery
};

const MISSING_IDENTITY: &str = "transfer object carries no identity";

fn identity_of<E, T, X>(data: &T) -> Result<E::Id, CrudError<X>>
where
    E: Identified,
    T: IdentifiedTransfer<E>
{
    data.identity().ok_or(CrudError::InvalidArgument(MISSING_IDENTITY))
}

fn not_found<E: Entity, X>() -> CrudError<X> {
    CrudError::NotFound {
        entity: E::NAME
    }
}

/// Count entities matching the configured context.
pub fn count<E, S, F>(session: &mut S, configure: F) -> CrudResult<u64, S, E>
where
    E: Entity,
    S: PersistenceSession<E> + ?Sized,
    F: FnOnce(&mut CountContext<S::Predicate>)
{
    let mut context = CountContext::new();
    configure(&mut context);
    let (distinct, predicates) = context.into_parts();

    let mut criteria = CriteriaQuery::count();
    criteria.distinct(distinct);
    if !predicates.is_empty() {
        criteria.restrict(predicates);
    }

    let total = session.count(criteria)?;
    debug!(entity = E::NAME, distinct, total, "count");
    Ok(total)
}

/// List entities matching the configured context as transfer objects.
pub fn list<E, T, S, F>(session: &mut S, configure: F) -> CrudResult<Vec<T>, S, E>
where
    E: Entity,
    T: TransferObject<E>,
    S: PersistenceSession<E> + ?Sized,
    F: FnOnce(&mut ListContext<S::Predicate, S::Order>)
{
    let mut context = ListContext::new();
    configure(&mut context);
    let parts = context.into_parts();

    let mut criteria = CriteriaQuery::select();
    criteria.distinct(parts.distinct);
    if !parts.predicates.is_empty() {
        criteria.restrict(parts.predicates);
    }
    if !parts.orders.is_empty() {
        criteria.order_by(parts.orders);
    }

    let mut query = TypedQuery::new(criteria);
    if let Some(first_result) = parts.first_result {
        query.set_first_result(first_result);
    }
    if let Some(max_results) = parts.max_results {
        query.set_max_results(max_results);
    }
    if let Some(lock_mode) = parts.lock_mode {
        query.set_lock_mode(lock_mode);
    }

    let rows = session.list(query)?;
    debug!(entity = E::NAME, rows = rows.len(), "list");
    Ok(rows.iter().map(T::from_entity).collect())
}

/// Load the entity identified by `data` into `data`.
///
/// # Errors
///
/// [`CrudError::NotFound`] when no entity matches.
pub fn find<E, T, S>(session: &mut S, data: &mut T, lock_mode: LockMode) -> CrudResult<(), S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    if try_find::<E, T, S>(session, data, lock_mode)? {
        Ok(())
    } else {
        Err(not_found::<E, _>())
    }
}

/// Load the entity identified by `data` into `data`, reporting a miss as
/// `false` and leaving `data` untouched.
pub fn try_find<E, T, S>(session: &mut S, data: &mut T, lock_mode: LockMode) -> CrudResult<bool, S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    let id = identity_of::<E, T, S::Error>(data)?;
    let Some(entity) = session.find(&id, lock_mode)? else {
        debug!(entity = E::NAME, ?id, %lock_mode, "find missed");
        return Ok(false);
    };

    data.copy_all_properties(&entity);
    debug!(entity = E::NAME, ?id, %lock_mode, "found");
    Ok(true)
}

/// Persist a new entity built from `data`, then refresh `data` with the
/// stored state including generated values.
pub fn create<E, T, S>(session: &mut S, data: &mut T) -> CrudResult<(), S, E>
where
    E: Entity,
    T: TransferObject<E>,
    S: PersistenceSession<E> + ?Sized
{
    let mut entity = E::default();
    data.copy_insert_properties(&mut entity);
    session.persist(&mut entity)?;
    session.flush()?;
    data.copy_all_properties(&entity);
    debug!(entity = E::NAME, "created");
    Ok(())
}

/// Apply the updatable fields of `data` to the stored entity.
///
/// # Errors
///
/// [`CrudError::NotFound`] when no entity matches.
pub fn update<E, T, S>(session: &mut S, data: &mut T, lock_mode: LockMode) -> CrudResult<(), S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    if try_update::<E, T, S>(session, data, lock_mode)? {
        Ok(())
    } else {
        Err(not_found::<E, _>())
    }
}

/// Apply the updatable fields of `data` to the stored entity, reporting a
/// miss as `false` and leaving `data` untouched.
pub fn try_update<E, T, S>(
    session: &mut S,
    data: &mut T,
    lock_mode: LockMode
) -> CrudResult<bool, S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    let id = identity_of::<E, T, S::Error>(data)?;
    let Some(mut entity) = session.find(&id, lock_mode)? else {
        debug!(entity = E::NAME, ?id, %lock_mode, "update missed");
        return Ok(false);
    };

    data.copy_update_properties(&mut entity);
    session.merge(&entity)?;
    session.flush()?;
    data.copy_all_properties(&entity);
    debug!(entity = E::NAME, ?id, %lock_mode, "updated");
    Ok(true)
}

/// Remove the entity identified by `data`.
///
/// # Errors
///
/// [`CrudError::NotFound`] when no entity matches.
pub fn delete<E, T, S>(session: &mut S, data: &T, lock_mode: LockMode) -> CrudResult<(), S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    if try_delete::<E, T, S>(session, data, lock_mode)? {
        Ok(())
    } else {
        Err(not_found::<E, _>())
    }
}

/// Remove the entity identified by `data`, reporting a miss as `false`.
pub fn try_delete<E, T, S>(session: &mut S, data: &T, lock_mode: LockMode) -> CrudResult<bool, S, E>
where
    E: Identified,
    T: IdentifiedTransfer<E>,
    S: PersistenceSession<E> + ?Sized
{
    let id = identity_of::<E, T, S::Error>(data)?;
    let Some(entity) = session.find(&id, lock_mode)? else {
        debug!(entity = E::NAME, ?id, %lock_mode, "delete missed");
        return Ok(false);
    };

    session.remove(&entity)?;
    session.flush()?;
    debug!(entity = E::NAME, ?id, %lock_mode, "deleted");
    Ok(true)
}
