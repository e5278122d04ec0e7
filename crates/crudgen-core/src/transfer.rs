// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property-copy contract between transfer objects and entities.
//!
//! The transfer-object generator implements these traits; the shared CRUD
//! procedures in [`crud`](crate::crud) only call them. Which properties take
//! part in each copy is decided by the entity declaration:
//!
//! | Copy | Direction | Properties |
//! |------|-----------|------------|
//! | `all` | entity → data | every emitted field |
//! | `insert` | data → entity | not `#[id]`, not `#[auto]`, not `#[column(insertable = false)]` |
//! | `update` | data → entity | not `#[id]`, not `#[auto]`, not `#[column(updatable = false)]` |

use crate::{Entity, Identified};

/// Flat value carrying the storage shape of entity `E`.
pub trait TransferObject<E: Entity>: Default {
    /// Overwrite every field of `self` from `entity`.
    fn copy_all_properties(&mut self, entity: &E);

    /// Copy the fields legal to set at creation into `entity`.
    fn copy_insert_properties(&self, entity: &mut E);

    /// Copy the fields legal to change after creation into `entity`.
    fn copy_update_properties(&self, entity: &mut E);

    /// Build a transfer object from an entity.
    fn from_entity(entity: &E) -> Self {
        let mut data = Self::default();
        data.copy_all_properties(entity);
        data
    }
}

/// Transfer object of an entity with an identity property.
pub trait IdentifiedTransfer<E: Identified>: TransferObject<E> {
    /// Identity carried by this value, `None` when a nullable identity is
    /// unset.
    fn identity(&self) -> Option<E::Id>;
}
