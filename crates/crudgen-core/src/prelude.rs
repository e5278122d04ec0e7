// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crudgen_core::prelude::*;
//! ```

pub use crate::{
    CountContext, CriteriaQuery, CrudError, CrudResult, Entity, Identified, IdentifiedTransfer,
    ListContext, LockMode, PersistenceSession, Ref, TransferObject, TypedQuery
};
