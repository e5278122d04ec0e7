// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime contracts for crudgen generated code.
//!
//! `#[derive(Entity)]` emits a flat transfer object and a CRUD trait for an
//! entity. Both are thin: the transfer object implements [`TransferObject`],
//! and every default method of the CRUD trait delegates to a procedure in
//! [`crud`], which talks to a [`PersistenceSession`].
//!
//! # Overview
//!
//! - [`Entity`], [`Identified`], [`Ref`] — Entity metadata and relation
//!   handles
//! - [`PersistenceSession`] — The one capability generated code requires
//! - [`CountContext`], [`ListContext`] — Caller-side query configuration
//! - [`CriteriaQuery`], [`TypedQuery`] — What the session is asked to run
//! - [`LockMode`] — Lock requested for find, update and delete
//! - [`CrudError`] — Not-found, invalid-argument and session failures
//! - [`prelude`] — Convenient re-exports
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`LockMode`] and [`Ref`] |
//! | `memory` | [`memory::MemorySession`], a vector-backed session |
//!
//! # Usage
//!
//! Most users depend on `crudgen`, which re-exports this crate together with
//! the derive. For hand-written sessions:
//!
//! ```rust,ignore
//! use crudgen_core::prelude::*;
//!
//! impl PersistenceSession<Employee> for PgSession {
//!     type Error = sqlx::Error;
//!     type Predicate = Condition;
//!     type Order = OrderBy;
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod context;
pub mod crud;
mod entity;
mod error;
mod lock;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod prelude;
mod query;
mod session;
mod transfer;

pub use context::{CountContext, ListContext};
pub use entity::{Entity, Identified, Ref};
pub use error::{CrudError, CrudResult};
pub use lock::LockMode;
pub use query::{CriteriaQuery, Selection, TypedQuery};
pub use session::{PersistenceSession, SessionCountContext, SessionError, SessionListContext};
pub use transfer::{IdentifiedTransfer, TransferObject};
