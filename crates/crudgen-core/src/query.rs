// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Criteria-style query values handed to the persistence session.
//!
//! [`CriteriaQuery`] carries the shape of the query (what is selected,
//! distinctness, predicates, orderings). [`TypedQuery`] wraps a finished
//! criteria query with execution settings: pagination and lock mode.
//! Sessions translate both into whatever their backend understands.

use crate::LockMode;

/// What a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A single row count.
    Count,

    /// Whole entities.
    Entity
}

/// Query shape: selection, distinctness, predicates and orderings.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaQuery<P, O> {
    selection:  Selection,
    distinct:   bool,
    predicates: Vec<P>,
    orders:     Vec<O>
}

impl<P, O> CriteriaQuery<P, O> {
    /// Query counting entities.
    pub fn count() -> Self {
        Self::with_selection(Selection::Count)
    }

    /// Query selecting whole entities.
    pub fn select() -> Self {
        Self::with_selection(Selection::Entity)
    }

    fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            distinct: false,
            predicates: Vec::new(),
            orders: Vec::new()
        }
    }

    /// Collapse duplicate rows.
    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// Restrict results to rows matching every predicate.
    ///
    /// Replaces any previous restriction.
    pub fn restrict(&mut self, predicates: Vec<P>) -> &mut Self {
        self.predicates = predicates;
        self
    }

    /// Order results. Replaces any previous ordering.
    pub fn order_by(&mut self, orders: Vec<O>) -> &mut Self {
        self.orders = orders;
        self
    }

    /// What the query selects.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether duplicate rows are collapsed.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Restriction predicates, combined with AND.
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }

    /// Sort orders, most significant first.
    pub fn orders(&self) -> &[O] {
        &self.orders
    }

    /// Take the predicates and orders out of the query.
    pub fn into_parts(self) -> (Vec<P>, Vec<O>) {
        (self.predicates, self.orders)
    }
}

/// A finished criteria query plus execution settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedQuery<P, O> {
    criteria:     CriteriaQuery<P, O>,
    first_result: Option<usize>,
    max_results:  Option<usize>,
    lock_mode:    Option<LockMode>
}

impl<P, O> TypedQuery<P, O> {
    /// Wrap a finished criteria query.
    pub fn new(criteria: CriteriaQuery<P, O>) -> Self {
        Self {
            criteria,
            first_result: None,
            max_results: None,
            lock_mode: None
        }
    }

    /// Skip the first `first_result` rows.
    pub fn set_first_result(&mut self, first_result: usize) -> &mut Self {
        self.first_result = Some(first_result);
        self
    }

    /// Return at most `max_results` rows.
    pub fn set_max_results(&mut self, max_results: usize) -> &mut Self {
        self.max_results = Some(max_results);
        self
    }

    /// Lock the selected rows.
    pub fn set_lock_mode(&mut self, lock_mode: LockMode) -> &mut Self {
        self.lock_mode = Some(lock_mode);
        self
    }

    /// Underlying criteria query.
    pub fn criteria(&self) -> &CriteriaQuery<P, O> {
        &self.criteria
    }

    /// Rows to skip, if set.
    pub fn first_result(&self) -> Option<usize> {
        self.first_result
    }

    /// Row limit, if set.
    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// Requested lock mode, if any.
    pub fn lock_mode(&self) -> Option<LockMode> {
        self.lock_mode
    }

    /// Take the criteria query back out.
    pub fn into_criteria(self) -> CriteriaQuery<P, O> {
        self.criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_query_shape() {
        let query = CriteriaQuery::<(), ()>::count();
        assert_eq!(query.selection(), Selection::Count);
        assert!(!query.is_distinct());
        assert!(query.predicates().is_empty());
        assert!(query.orders().is_empty());
    }

    #[test]
    fn select_query_configuration() {
        let mut query = CriteriaQuery::select();
        query.distinct(true).restrict(vec!["a", "b"]).order_by(vec![1]);
        assert_eq!(query.selection(), Selection::Entity);
        assert!(query.is_distinct());
        assert_eq!(query.predicates(), &["a", "b"]);
        assert_eq!(query.into_parts(), (vec!["a", "b"], vec![1]));
    }

    #[test]
    fn typed_query_settings() {
        let mut query = TypedQuery::new(CriteriaQuery::<(), ()>::select());
        assert_eq!(query.first_result(), None);
        assert_eq!(query.max_results(), None);
        assert_eq!(query.lock_mode(), None);

        query
            .set_first_result(2)
            .set_max_results(3)
            .set_lock_mode(LockMode::PessimisticRead);
        assert_eq!(query.first_result(), Some(2));
        assert_eq!(query.max_results(), Some(3));
        assert_eq!(query.lock_mode(), Some(LockMode::PessimisticRead));
        assert_eq!(query.criteria().selection(), Selection::Entity);
    }
}
