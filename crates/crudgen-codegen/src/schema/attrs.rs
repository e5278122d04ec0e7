// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! This module defines the internal [`EntityAttrs`] structure used for
//! parsing `#[entity(...)]` attributes. The public API uses
//! [`EntitySchema`](super::EntitySchema).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `module` | No | `""` | Module path used in the qualified name |
//! | `transfer` | No | `{Entity}Data` | Transfer object type name |
//! | `transfer_trait` | No | `{Entity}Transfer` | Transfer trait name |
//! | `crud` | No | `{Entity}Crud` | CRUD trait name |
//! | `crate` | No | `::crudgen` | Path to the runtime crate |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Default runtime crate path for generated code.
pub fn default_runtime_path() -> syn::Path {
    syn::parse_quote!(::crudgen)
}

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[entity(
///     module = "hr",
///     transfer = "EmployeeDto",
///     crud = "EmployeeRepository",
///     crate = "::my_app::crudgen"
/// )]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier (e.g., `Employee`).
    pub ident: Ident,

    /// Struct visibility, propagated to every generated item.
    pub vis: Visibility,

    /// Generic parameters; entities must have none.
    pub generics: Generics,

    /// Module path prefix for the qualified name (e.g., `"hr"`).
    #[darling(default)]
    pub module: String,

    /// Transfer object type name override.
    #[darling(default)]
    pub transfer: Option<Ident>,

    /// Transfer trait name override.
    #[darling(default)]
    pub transfer_trait: Option<Ident>,

    /// CRUD trait name override.
    #[darling(default)]
    pub crud: Option<Ident>,

    /// Path to the runtime crate.
    #[darling(rename = "crate", default = "default_runtime_path")]
    pub krate: syn::Path
}
