// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation engine for crudgen.
//!
//! Turns a normalized [`EntitySchema`] into two artifacts: a flat transfer
//! object and a CRUD trait. The engine is shared by the `#[derive(Entity)]`
//! macro (token output) and by build scripts or snapshot tests (text
//! output).
//!
//! # Architecture
//!
//! ```text
//! lib.rs (entry points)
//! │
//! ├── schema/      → EntitySchema, PropertyDescriptor, attribute parsing
//! ├── provider.rs  → SchemaProvider, SchemaRegistry, DeclarationProvider
//! │
//! ├── entity.rs    → impl Entity / Identified for the entity
//! ├── transfer.rs  → {Entity}Data, {Entity}Transfer, TransferObject impls
//! ├── crud/        → {Entity}Crud trait and context aliases
//! │
//! └── render.rs    → prettyplease text output with origin header
//! ```
//!
//! # Text Output
//!
//! ```rust,ignore
//! use crudgen_codegen::{SchemaRegistry, render_crud_interface, render_transfer_object};
//!
//! let registry = SchemaRegistry::from_source(&std::fs::read_to_string("src/hr.rs")?)?;
//! for schema in registry.iter() {
//!     let data = render_transfer_object(schema, &registry)?;
//!     let crud = render_crud_interface(schema)?;
//!     // write to OUT_DIR
//! }
//! ```
//!
//! Generators are pure functions of their inputs and share no state.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod crud;
mod entity;
mod error;
mod provider;
mod render;
pub mod schema;
mod transfer;

pub use error::GenerateError;
pub use provider::{DeclarationProvider, SchemaProvider, SchemaRegistry};
use proc_macro2::TokenStream;
use quote::quote;
pub use render::{render_crud_interface, render_transfer_object};
pub use schema::EntitySchema;
use syn::DeriveInput;

/// Generate the transfer object, its trait impls and the trait impls of the
/// entity itself.
pub fn generate_transfer_object(
    schema: &EntitySchema,
    provider: &dyn SchemaProvider
) -> TokenStream {
    let entity = entity::generate(schema);
    let transfer = transfer::generate(schema, provider);
    quote! {
        #entity
        #transfer
    }
}

/// Generate the CRUD trait and its context aliases.
pub fn generate_crud_interface(schema: &EntitySchema) -> TokenStream {
    crud::generate(schema)
}

/// Full `#[derive(Entity)]` expansion.
///
/// # Errors
///
/// Returns darling errors for invalid entity declarations; report them
/// with [`darling::Error::write_errors`].
pub fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let schema = EntitySchema::from_derive_input(input)?;
    let transfer = generate_transfer_object(&schema, &DeclarationProvider);
    let crud = generate_crud_interface(&schema);
    Ok(quote! {
        #transfer
        #crud
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_emits_every_artifact() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct Employee {
                #[id]
                pub id: i64,
                pub name: String,
                #[relation]
                pub manager: Option<Ref<Employee>>,
            }
        };
        let code = expand(&input).unwrap().to_string().replace(' ', "");
        assert!(code.contains("impl::crudgen::EntityforEmployee"));
        assert!(code.contains("impl::crudgen::IdentifiedforEmployee"));
        assert!(code.contains("pubstructEmployeeData"));
        assert!(code.contains("pubtraitEmployeeTransfer"));
        assert!(code.contains("pubtraitEmployeeCrud"));
        assert!(code.contains("manager_id:Option<i64>"));
    }

    #[test]
    fn expand_output_parses() {
        let input: DeriveInput = syn::parse_quote! {
            struct Tag { label: String }
        };
        let tokens = expand(&input).unwrap();
        assert!(syn::parse2::<syn::File>(tokens).is_ok());
    }

    #[test]
    fn expand_reports_schema_errors() {
        let input: DeriveInput = syn::parse_quote! {
            struct Broken { #[relation] owner: i64 }
        };
        assert!(expand(&input).is_err());
    }
}
