// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Predicate and ordering contexts for `count` and `list`.
//!
//! A context is a plain accumulator handed to caller-supplied configuration
//! before the query runs. The predicate and order types come from the
//! persistence session, so any backend can plug in its own criteria values.
//!
//! # Example
//!
//! ```rust,ignore
//! let adults = repo.count(|ctx| {
//!     ctx.set_distinct(true);
//!     ctx.add_predicate(Criteria::gte("age", 18));
//! })?;
//!
//! let page = repo.list(|ctx| {
//!     ctx.add_order(Order::asc("name"));
//!     ctx.set_first_result(20);
//!     ctx.set_max_results(10);
//!     ctx.set_lock_mode(LockMode::PessimisticRead);
//! })?;
//! ```

use crate::LockMode;

/// Converts the `i32` pagination convention (negative means unset) to an
/// optional offset.
fn pagination_value(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Configuration accumulated for a `count` query.
#[derive(Debug, Clone, PartialEq)]
pub struct CountContext<P> {
    distinct:   bool,
    predicates: Vec<P>
}

impl<P> Default for CountContext<P> {
    fn default() -> Self {
        Self {
            distinct:   false,
            predicates: Vec::new()
        }
    }
}

impl<P> CountContext<P> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether duplicate rows are collapsed.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Collapse duplicate rows.
    pub fn set_distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// Accumulated predicates, combined with AND.
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }

    /// Add a predicate.
    pub fn add_predicate(&mut self, predicate: P) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    /// Add several predicates in order.
    pub fn add_predicates<I: IntoIterator<Item = P>>(&mut self, predicates: I) -> &mut Self {
        self.predicates.extend(predicates);
        self
    }

    pub(crate) fn into_parts(self) -> (bool, Vec<P>) {
        (self.distinct, self.predicates)
    }
}

/// Configuration accumulated for a `list` query.
///
/// Adds sort orders, pagination and a lock mode to the count context.
/// Pagination follows the "negative means no limit" convention: both
/// offsets start unset and a negative value clears them again.
#[derive(Debug, Clone, PartialEq)]
pub struct ListContext<P, O> {
    filter:       CountContext<P>,
    orders:       Vec<O>,
    first_result: Option<usize>,
    max_results:  Option<usize>,
    lock_mode:    Option<LockMode>
}

impl<P, O> Default for ListContext<P, O> {
    fn default() -> Self {
        Self {
            filter:       CountContext::default(),
            orders:       Vec::new(),
            first_result: None,
            max_results:  None,
            lock_mode:    None
        }
    }
}

impl<P, O> ListContext<P, O> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether duplicate rows are collapsed.
    pub fn is_distinct(&self) -> bool {
        self.filter.is_distinct()
    }

    /// Collapse duplicate rows.
    pub fn set_distinct(&mut self, distinct: bool) -> &mut Self {
        self.filter.set_distinct(distinct);
        self
    }

    /// Accumulated predicates, combined with AND.
    pub fn predicates(&self) -> &[P] {
        self.filter.predicates()
    }

    /// Add a predicate.
    pub fn add_predicate(&mut self, predicate: P) -> &mut Self {
        self.filter.add_predicate(predicate);
        self
    }

    /// Add several predicates in order.
    pub fn add_predicates<I: IntoIterator<Item = P>>(&mut self, predicates: I) -> &mut Self {
        self.filter.add_predicates(predicates);
        self
    }

    /// Accumulated sort orders, most significant first.
    pub fn orders(&self) -> &[O] {
        &self.orders
    }

    /// Append a sort order.
    pub fn add_order(&mut self, order: O) -> &mut Self {
        self.orders.push(order);
        self
    }

    /// Append several sort orders.
    pub fn add_orders<I: IntoIterator<Item = O>>(&mut self, orders: I) -> &mut Self {
        self.orders.extend(orders);
        self
    }

    /// Index of the first row to return, if set.
    pub fn first_result(&self) -> Option<usize> {
        self.first_result
    }

    /// Skip `first_result` rows. Negative clears the offset.
    pub fn set_first_result(&mut self, first_result: i32) -> &mut Self {
        self.first_result = pagination_value(first_result);
        self
    }

    /// Maximum number of rows to return, if set.
    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// Return at most `max_results` rows. Negative clears the limit.
    pub fn set_max_results(&mut self, max_results: i32) -> &mut Self {
        self.max_results = pagination_value(max_results);
        self
    }

    /// Lock mode requested for the selected rows.
    pub fn lock_mode(&self) -> Option<LockMode> {
        self.lock_mode
    }

    /// Lock the selected rows.
    pub fn set_lock_mode(&mut self, lock_mode: LockMode) -> &mut Self {
        self.lock_mode = Some(lock_mode);
        self
    }

    /// Drop a previously requested lock mode.
    pub fn clear_lock_mode(&mut self) -> &mut Self {
        self.lock_mode = None;
        self
    }

    pub(crate) fn into_parts(self) -> ListParts<P, O> {
        let (distinct, predicates) = self.filter.into_parts();
        ListParts {
            distinct,
            predicates,
            orders: self.orders,
            first_result: self.first_result,
            max_results: self.max_results,
            lock_mode: self.lock_mode
        }
    }
}

/// Owned state of a consumed [`ListContext`].
pub(crate) struct ListParts<P, O> {
    pub distinct:     bool,
    pub predicates:   Vec<P>,
    pub orders:       Vec<O>,
    pub first_result: Option<usize>,
    pub max_results:  Option<usize>,
    pub lock_mode:    Option<LockMode>
}
