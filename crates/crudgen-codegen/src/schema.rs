// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized entity schema.
//!
//! [`EntitySchema`] is the single input of both generators. It is built once
//! per generation request from a `syn::DeriveInput` and never mutated.
//!
//! # Architecture
//!
//! ```text
//! schema.rs (EntitySchema)
//! ├── attrs.rs       - #[entity(...)] via darling
//! ├── property.rs    - PropertyDescriptor, TypeDescriptor, PropertyCategory
//! ├── column.rs      - #[column(insertable, updatable)]
//! └── validation.rs  - #[validate(...)] rules
//! ```
//!
//! # Derived Names
//!
//! | Name | Default | Override |
//! |------|---------|----------|
//! | `transfer_type_name` | `{Entity}Data` | `#[entity(transfer = "..")]` |
//! | `transfer_interface_name` | `{Entity}Transfer` | `#[entity(transfer_trait = "..")]` |
//! | `crud_interface_name` | `{Entity}Crud` | `#[entity(crud = "..")]` |

mod attrs;
mod column;
mod property;
mod validation;

use darling::FromDeriveInput;
pub use property::{PropertyCategory, PropertyDescriptor, TypeDescriptor};
use quote::format_ident;
use syn::{DeriveInput, Ident, Visibility, ext::IdentExt};
pub use validation::{ValidationArg, ValidationRule};

use self::attrs::EntityAttrs;

/// Complete parsed entity definition.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    /// Struct identifier (e.g., `Employee`).
    pub ident: Ident,

    /// Struct visibility, reused for generated items.
    pub vis: Visibility,

    /// Module path from `#[entity(module = "..")]`, empty by default.
    pub package_name: String,

    /// `package_name::Ident`, or `Ident` when there is no package.
    pub qualified_name: String,

    /// Transfer object type name.
    pub transfer_type_name: Ident,

    /// Transfer trait name.
    pub transfer_interface_name: Ident,

    /// CRUD trait name.
    pub crud_interface_name: Ident,

    /// Runtime crate path used by generated code.
    pub runtime: syn::Path,

    /// Properties in declaration order.
    pub properties: Vec<PropertyDescriptor>,

    /// Index of the `#[id]` property in `properties`.
    identity_property: Option<usize>
}

impl EntitySchema {
    /// Parse an entity schema from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Generic struct
    /// - More than one `#[id]` field
    /// - Two properties mapping to the same transfer field
    /// - Invalid attribute values
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let schema = EntitySchema::from_derive_input(&input)?;
    /// assert_eq!(schema.transfer_type_name, "EmployeeData");
    /// ```
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(
                darling::Error::custom("Entity cannot be generic").with_span(&attrs.generics)
            );
        }

        let properties: Vec<PropertyDescriptor> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(PropertyDescriptor::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut ids = properties.iter().enumerate().filter(|(_, p)| p.is_id);
        let identity_property = ids.next().map(|(index, _)| index);
        if let Some((_, extra)) = ids.next() {
            return Err(
                darling::Error::custom("Entity must have at most one field with #[id] attribute")
                    .with_span(&extra.name)
            );
        }

        let mut emitted = Vec::with_capacity(properties.len());
        for property in &properties {
            let field = property.transfer_name().unraw().to_string();
            if emitted.contains(&field) {
                return Err(darling::Error::custom(format!(
                    "transfer field `{field}` is already emitted by another property"
                ))
                .with_span(&property.name));
            }
            emitted.push(field);
        }

        let ident = attrs.ident;
        let package_name = attrs.module.trim_matches(':').to_string();
        let qualified_name = if package_name.is_empty() {
            ident.to_string()
        } else {
            format!("{package_name}::{ident}")
        };

        Ok(Self {
            transfer_type_name: attrs
                .transfer
                .unwrap_or_else(|| format_ident!("{}Data", ident)),
            transfer_interface_name: attrs
                .transfer_trait
                .unwrap_or_else(|| format_ident!("{}Transfer", ident)),
            crud_interface_name: attrs
                .crud
                .unwrap_or_else(|| format_ident!("{}Crud", ident)),
            ident,
            vis: attrs.vis,
            package_name,
            qualified_name,
            runtime: attrs.krate,
            properties,
            identity_property
        })
    }

    /// Entity struct name.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// The `#[id]` property, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&PropertyDescriptor> {
        self.identity_property.map(|index| &self.properties[index])
    }

    /// Whether find/update/delete can be generated.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.identity_property.is_some()
    }

    /// Entity identity type with `Option` removed.
    #[must_use]
    pub fn identity_type(&self) -> Option<&syn::Type> {
        self.identity().map(|p| &p.ty.inner)
    }

    /// Set the package when none was declared.
    ///
    /// Used when schemas come from inline modules of a source file.
    pub fn with_default_package(mut self, package: &str) -> Self {
        if self.package_name.is_empty() && !package.is_empty() {
            self.package_name = package.to_string();
            self.qualified_name = format!("{package}::{}", self.ident);
        }
        self
    }
}
