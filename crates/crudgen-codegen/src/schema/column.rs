// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column write configuration.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[column(insertable = false)]` | excluded from `copy_insert_properties` |
//! | `#[column(updatable = false)]` | excluded from `copy_update_properties` |

use syn::{Attribute, LitBool};

/// Parsed `#[column(...)]` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Whether `create` may set the column.
    pub insertable: bool,

    /// Whether `update` may change the column.
    pub updatable: bool
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            insertable: true,
            updatable:  true
        }
    }
}

impl ColumnConfig {
    /// Parse from a `#[column(...)]` attribute.
    ///
    /// Flags may be given as `insertable = false` or bare `insertable`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or non-boolean values.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();

        attr.parse_nested_meta(|meta| {
            let value = if meta.input.peek(syn::Token![=]) {
                meta.value()?.parse::<LitBool>()?.value()
            } else {
                true
            };

            if meta.path.is_ident("insertable") {
                config.insertable = value;
            } else if meta.path.is_ident("updatable") {
                config.updatable = value;
            } else {
                return Err(meta.error("expected `insertable` or `updatable`"));
            }
            Ok(())
        })?;

        Ok(config)
    }
}
