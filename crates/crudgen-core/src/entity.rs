// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity traits and foreign-key references.
//!
//! `#[derive(Entity)]` implements [`Entity`] for every annotated struct and
//! [`Identified`] for those with an `#[id]` field. Relation columns are
//! declared as [`Ref<Target>`](Ref), which stores only the identity of the
//! referenced entity the way a foreign key column does.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Entity, Clone, Default)]
//! pub struct Employee {
//!     #[id]
//!     pub id: i64,
//!
//!     #[relation]
//!     pub manager: Option<Ref<Employee>>,
//! }
//!
//! assert_eq!(Employee::NAME, "Employee");
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher}
};

/// A persistent record type.
///
/// `Default` provides the blank instance that `create` fills from a transfer
/// object before persisting it.
pub trait Entity: Clone + Default + 'static {
    /// Qualified entity name, e.g. `hr::Employee`.
    const NAME: &'static str;
}

/// An entity with an identity (primary key) property.
pub trait Identified: Entity {
    /// Identity value type.
    ///
    /// For a nullable identity (`Option<T>`) this is the inner `T`.
    type Id: Clone + PartialEq + fmt::Debug + 'static;

    /// Current identity, `None` while a nullable identity is unassigned.
    fn identity(&self) -> Option<&Self::Id>;
}

/// Foreign-key reference to another entity.
///
/// Holds only the identity of the target. Transfer objects flatten a
/// `Ref<T>` property into a `{property}_id` field of type `T::Id`.
pub struct Ref<T: Identified> {
    id: T::Id
}

impl<T: Identified> Ref<T> {
    /// Reference the entity with the given identity.
    pub fn new(id: T::Id) -> Self {
        Self {
            id
        }
    }

    /// Identity of the referenced entity.
    pub fn id(&self) -> &T::Id {
        &self.id
    }

    /// Consume the reference, returning the identity.
    pub fn into_id(self) -> T::Id {
        self.id
    }

    /// Whether this reference points at `entity`.
    pub fn points_to(&self, entity: &T) -> bool {
        entity.identity() == Some(&self.id)
    }
}

impl<T: Identified> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone()
        }
    }
}

impl<T: Identified> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: Identified> Eq for Ref<T> where T::Id: Eq {}

impl<T: Identified> Hash for Ref<T>
where
    T::Id: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: Identified> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&T::NAME).field(&self.id).finish()
    }
}

impl<T: Identified> Default for Ref<T>
where
    T::Id: Default
{
    fn default() -> Self {
        Self {
            id: T::Id::default()
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Identified> serde::Serialize for Ref<T>
where
    T::Id: serde::Serialize
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Identified> serde::Deserialize<'de> for Ref<T>
where
    T::Id: serde::Deserialize<'de>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::Id::deserialize(deserializer).map(Self::new)
    }
}
