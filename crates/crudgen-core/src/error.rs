// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors raised by generated CRUD operations.

use thiserror::Error;

use crate::session::SessionError;

/// Failure of a generated CRUD operation.
///
/// Session failures (lock conflicts, constraint violations, I/O) pass
/// through untouched as [`CrudError::Session`].
#[derive(Debug, Error)]
pub enum CrudError<S> {
    /// No entity matched the identity under the requested lock mode.
    #[error("{entity} not found")]
    NotFound {
        /// Qualified entity name.
        entity: &'static str
    },

    /// A required argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The persistence session failed.
    #[error(transparent)]
    Session(#[from] S)
}

impl<S> CrudError<S> {
    /// Check if this is a not-found error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-argument error.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The session error, if that is what failed.
    pub fn session_error(&self) -> Option<&S> {
        match self {
            Self::Session(e) => Some(e),
            _ => None
        }
    }
}

/// Result of a CRUD operation on entity `E` through session `S`.
pub type CrudResult<T, S, E> = Result<T, CrudError<SessionError<S, E>>>;
