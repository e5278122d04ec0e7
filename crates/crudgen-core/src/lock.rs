// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lock modes applied when reading entities.

use std::fmt;

/// Concurrency-control strategy for an entity lookup or list query.
///
/// Optimistic modes rely on the persistence layer detecting conflicting
/// writers at flush time; pessimistic modes ask it to hold a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LockMode {
    /// No locking.
    None,

    /// Version check at flush time.
    #[default]
    Optimistic,

    /// Version check plus forced version increment.
    OptimisticForceIncrement,

    /// Shared lock.
    PessimisticRead,

    /// Exclusive lock.
    PessimisticWrite,

    /// Exclusive lock plus forced version increment.
    PessimisticForceIncrement
}

impl LockMode {
    /// Check if this mode takes a database lock.
    pub const fn is_pessimistic(&self) -> bool {
        matches!(
            self,
            Self::PessimisticRead | Self::PessimisticWrite | Self::PessimisticForceIncrement
        )
    }

    /// Check if this mode relies on version checking.
    pub const fn is_optimistic(&self) -> bool {
        matches!(self, Self::Optimistic | Self::OptimisticForceIncrement)
    }

    /// Check if this mode bumps the entity version.
    pub const fn forces_increment(&self) -> bool {
        matches!(
            self,
            Self::OptimisticForceIncrement | Self::PessimisticForceIncrement
        )
    }

    /// Stable lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Optimistic => "optimistic",
            Self::OptimisticForceIncrement => "optimistic_force_increment",
            Self::PessimisticRead => "pessimistic_read",
            Self::PessimisticWrite => "pessimistic_write",
            Self::PessimisticForceIncrement => "pessimistic_force_increment"
        }
    }
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
