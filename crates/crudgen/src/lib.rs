// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # crudgen
//!
//! One crate, all features. Re-exports:
//! - [`Entity`](macro@Entity) derive macro from `crudgen-impl`
//! - All types from `crudgen-core` ([`PersistenceSession`], [`LockMode`],
//!   [`CrudError`], [`Ref`], ...)

pub use crudgen_core::*;
pub use crudgen_impl::Entity;
