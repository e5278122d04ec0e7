// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime trait impls for the entity itself.
//!
//! `Entity` carries the qualified name; `Identified` is emitted only when
//! the entity has an `#[id]` property.

use proc_macro2::TokenStream;
use quote::quote;

use crate::schema::EntitySchema;

/// Generate `impl Entity` and, with an identity, `impl Identified`.
pub fn generate(schema: &EntitySchema) -> TokenStream {
    let entity = schema.name();
    let runtime = &schema.runtime;
    let qualified_name = &schema.qualified_name;

    let identified = schema.identity().map(|identity| {
        let name = &identity.name;
        let id_type = &identity.ty.inner;
        let body = if identity.is_nullable() {
            quote! { self.#name.as_ref() }
        } else {
            quote! { ::core::option::Option::Some(&self.#name) }
        };
        quote! {
            impl #runtime::Identified for #entity {
                type Id = #id_type;

                fn identity(&self) -> ::core::option::Option<&Self::Id> {
                    #body
                }
            }
        }
    });

    quote! {
        impl #runtime::Entity for #entity {
            const NAME: &'static str = #qualified_name;
        }

        #identified
    }
}
