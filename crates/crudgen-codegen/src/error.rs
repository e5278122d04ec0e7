// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation errors.

use thiserror::Error;

/// Failure to produce generated source.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input source is not valid Rust.
    #[error("failed to parse source: {0}")]
    Parse(#[from] syn::Error),

    /// An entity declaration is invalid.
    #[error("invalid entity declaration: {0}")]
    Schema(#[from] darling::Error),

    /// Generated tokens did not form a valid file.
    #[error("failed to render generated code: {0}")]
    Render(#[source] syn::Error)
}
