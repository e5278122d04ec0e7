// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transfer object generation.
//!
//! Emits a flat value type mirroring the storage shape of the entity:
//!
//! | Property | Field | Type |
//! |----------|-------|------|
//! | `name: T` | `name` | `T` |
//! | `#[relation] x: Ref<E>` | `x_id` | identity of `E` |
//! | `#[relation] x: Option<Ref<E>>` | `x_id` | `Option<` identity of `E` `>` |
//! | `#[relation]` to `E` without identity | none | |
//!
//! Alongside the struct: getters and setters, the `{Entity}Transfer` trait,
//! and the runtime `TransferObject` / `IdentifiedTransfer` impls.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type, ext::IdentExt};
use tracing::debug;

use crate::{
    provider::SchemaProvider,
    schema::{EntitySchema, PropertyCategory, PropertyDescriptor}
};

/// A property as it appears in the transfer object.
struct TransferField<'a> {
    property: &'a PropertyDescriptor,
    name:     Ident,
    ty:       Type
}

impl TransferField<'_> {
    fn declaration(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        let validations = self.property.validations.iter().map(|v| v.to_attribute());
        quote! {
            #(#validations)*
            #name: #ty
        }
    }

    fn accessors(&self) -> TokenStream {
        let name = &self.name;
        let ty = &self.ty;
        let setter = format_ident!("set_{}", name.unraw());
        let getter_doc = format!("Value of `{name}`.");
        let setter_doc = format!("Replace `{name}`.");
        quote! {
            #[doc = #getter_doc]
            pub fn #name(&self) -> &#ty {
                &self.#name
            }

            #[doc = #setter_doc]
            pub fn #setter(&mut self, value: #ty) {
                self.#name = value;
            }
        }
    }

    /// `self.field = ..entity..;`
    fn copy_from_entity(&self) -> TokenStream {
        let name = &self.name;
        let property = &self.property.name;
        match self.property.category {
            PropertyCategory::PlainColumn => quote! {
                self.#name = ::core::clone::Clone::clone(&entity.#property);
            },
            PropertyCategory::RelationColumn {
                ..
            } if self.property.is_nullable() => quote! {
                self.#name = entity.#property.as_ref().map(|r| ::core::clone::Clone::clone(r.id()));
            },
            PropertyCategory::RelationColumn {
                ..
            } => quote! {
                self.#name = ::core::clone::Clone::clone(entity.#property.id());
            }
        }
    }

    /// `entity.property = ..self..;`
    fn copy_into_entity(&self, runtime: &syn::Path) -> TokenStream {
        let name = &self.name;
        let property = &self.property.name;
        match self.property.category {
            PropertyCategory::PlainColumn => quote! {
                entity.#property = ::core::clone::Clone::clone(&self.#name);
            },
            PropertyCategory::RelationColumn {
                ..
            } if self.property.is_nullable() => quote! {
                entity.#property = ::core::clone::Clone::clone(&self.#name).map(#runtime::Ref::new);
            },
            PropertyCategory::RelationColumn {
                ..
            } => quote! {
                entity.#property = #runtime::Ref::new(::core::clone::Clone::clone(&self.#name));
            }
        }
    }
}

/// Resolve the emitted fields in declaration order, dropping relations whose
/// target has no identity.
fn transfer_fields<'a>(
    schema: &'a EntitySchema,
    provider: &dyn SchemaProvider
) -> Vec<TransferField<'a>> {
    schema
        .properties
        .iter()
        .filter_map(|property| {
            let ty = match &property.category {
                PropertyCategory::PlainColumn => property.ty.declared(),
                PropertyCategory::RelationColumn {
                    target
                } => {
                    let Some(id) = provider.identity_type(schema, target) else {
                        debug!(
                            entity = %schema.qualified_name,
                            property = %property.name,
                            "omitting relation without target identity"
                        );
                        return None;
                    };
                    if property.is_nullable() {
                        syn::parse_quote!(Option<#id>)
                    } else {
                        id
                    }
                }
            };
            Some(TransferField {
                property,
                name: property.transfer_name(),
                ty
            })
        })
        .collect()
}

/// Generate the transfer object and its trait impls.
pub fn generate(schema: &EntitySchema, provider: &dyn SchemaProvider) -> TokenStream {
    let vis = &schema.vis;
    let entity = schema.name();
    let runtime = &schema.runtime;
    let data = &schema.transfer_type_name;
    let transfer_trait = &schema.transfer_interface_name;
    let fields = transfer_fields(schema, provider);

    let validate = if fields.iter().any(|f| !f.property.validations.is_empty()) {
        quote! { , ::validator::Validate }
    } else {
        TokenStream::new()
    };

    let declarations = fields.iter().map(TransferField::declaration);
    let accessors = fields.iter().map(TransferField::accessors);
    let copy_all = fields.iter().map(TransferField::copy_from_entity);
    let copy_insert = fields
        .iter()
        .filter(|f| f.property.insertable)
        .map(|f| f.copy_into_entity(runtime));
    let copy_update = fields
        .iter()
        .filter(|f| f.property.updatable)
        .map(|f| f.copy_into_entity(runtime));

    let struct_doc = format!("Transfer object for [`{entity}`].");
    let trait_doc = format!("Transfer contract of [`{entity}`], implemented by [`{data}`].");

    let identified = identified_transfer(schema, &fields);
    debug!(entity = %schema.qualified_name, fields = fields.len(), "generated transfer object");

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize #validate)]
        #vis struct #data {
            #(#declarations),*
        }

        impl #data {
            #(#accessors)*
        }

        #[doc = #trait_doc]
        #vis trait #transfer_trait: #runtime::TransferObject<#entity> {}

        impl #transfer_trait for #data {}

        #[allow(unused_variables)]
        impl #runtime::TransferObject<#entity> for #data {
            fn copy_all_properties(&mut self, entity: &#entity) {
                #(#copy_all)*
            }

            fn copy_insert_properties(&self, entity: &mut #entity) {
                #(#copy_insert)*
            }

            fn copy_update_properties(&self, entity: &mut #entity) {
                #(#copy_update)*
            }
        }

        #identified
    }
}

fn identified_transfer(schema: &EntitySchema, fields: &[TransferField<'_>]) -> TokenStream {
    let Some(identity) = fields.iter().find(|f| f.property.is_id) else {
        return TokenStream::new();
    };

    let entity = schema.name();
    let runtime = &schema.runtime;
    let data = &schema.transfer_type_name;
    let name = &identity.name;
    let body = if identity.property.is_nullable() {
        quote! { ::core::clone::Clone::clone(&self.#name) }
    } else {
        quote! { ::core::option::Option::Some(::core::clone::Clone::clone(&self.#name)) }
    };

    quote! {
        impl #runtime::IdentifiedTransfer<#entity> for #data {
            fn identity(&self) -> ::core::option::Option<<#entity as #runtime::Identified>::Id> {
                #body
            }
        }
    }
}
