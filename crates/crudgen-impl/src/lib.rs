// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Internal proc-macro crate for crudgen.
//!
//! Use the `crudgen` crate instead; it re-exports [`Entity`](macro@Entity)
//! together with the runtime the generated code calls into.

#![warn(missing_docs)]
#![warn(clippy::all)]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive a transfer object and a CRUD trait for an entity.
///
/// # Entity Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `module = ".."` | `""` | Module path in the qualified name |
/// | `transfer = ".."` | `{Entity}Data` | Transfer object name |
/// | `transfer_trait = ".."` | `{Entity}Transfer` | Transfer trait name |
/// | `crud = ".."` | `{Entity}Crud` | CRUD trait name |
/// | `crate = ".."` | `::crudgen` | Runtime crate path |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Identity property; enables find/update/delete |
/// | `#[auto]` | Generated value; never inserted or updated |
/// | `#[relation]` | Foreign key on a `Ref<T>` or `Option<Ref<T>>` field |
/// | `#[column(insertable = false, updatable = false)]` | Exclude from create or update |
/// | `#[validate(..)]` | Constraint copied onto the transfer object field |
///
/// # Example
///
/// ```rust,ignore
/// use crudgen::{Entity, Ref};
///
/// #[derive(Entity, Debug, Clone, Default, PartialEq)]
/// #[entity(module = "hr")]
/// pub struct Employee {
///     #[id]
///     pub id: i64,
///
///     #[validate(length(min = 1))]
///     pub name: String,
///
///     pub salary: Option<f64>,
///
///     #[relation]
///     pub manager: Option<Ref<Employee>>,
/// }
///
/// // Generated: EmployeeData { id, name, salary, manager_id: Option<i64> }
/// // Generated: EmployeeTransfer, EmployeeCrud, EmployeeCountContext, EmployeeListContext
/// ```
#[proc_macro_derive(Entity, attributes(entity, id, auto, relation, column, validate))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match crudgen_codegen::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}
