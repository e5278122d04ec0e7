// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CRUD trait generation.
//!
//! Emits `{Entity}Crud`, a trait with one required associated type and
//! accessor plus default methods that delegate to the runtime's shared
//! procedures in `crud`:
//!
//! | Method | Emitted | Runtime procedure |
//! |--------|---------|-------------------|
//! | [`count`](Context::count_method) | always | `crud::count` |
//! | [`list`](Context::list_method) | always | `crud::list` |
//! | [`create`](Context::create_method) | always | `crud::create` |
//! | [`find`, `try_find`](Context::find_methods) | with `#[id]` | `crud::find`, `crud::try_find` |
//! | [`update`, `try_update`](Context::update_methods) | with `#[id]` | `crud::update`, `crud::try_update` |
//! | [`delete`, `try_delete`](Context::delete_methods) | with `#[id]` | `crud::delete`, `crud::try_delete` |
//!
//! Every lock-taking method has a `*_locked` sibling; the plain form passes
//! `LockMode::Optimistic`.

mod context;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use self::context::Context;
use crate::schema::EntitySchema;

/// Generate the CRUD trait and its context aliases.
pub fn generate(schema: &EntitySchema) -> TokenStream {
    let ctx = Context::new(schema);
    let Context {
        vis,
        entity_name,
        trait_name,
        count_context,
        list_context,
        runtime,
        ..
    } = &ctx;

    let count = ctx.count_method();
    let list = ctx.list_method();
    let find = ctx.find_methods();
    let create = ctx.create_method();
    let update = ctx.update_methods();
    let delete = ctx.delete_methods();

    let trait_doc = format!("CRUD operations for [`{entity_name}`] over a persistence session.");
    let count_doc = format!("Count context for [`{trait_name}::count`] on session `S`.");
    let list_doc = format!("List context for [`{trait_name}::list`] on session `S`.");

    debug!(
        entity = %schema.qualified_name,
        identity = schema.has_identity(),
        "generated CRUD trait"
    );

    quote! {
        #[doc = #trait_doc]
        #vis trait #trait_name {
            /// Session the operations run against.
            type Session: #runtime::PersistenceSession<#entity_name>;

            /// Active persistence session.
            fn persistence_context(&mut self) -> &mut Self::Session;

            #count
            #list
            #find
            #create
            #update
            #delete
        }

        #[doc = #count_doc]
        #vis type #count_context<S> = #runtime::SessionCountContext<S, #entity_name>;

        #[doc = #list_doc]
        #vis type #list_context<S> = #runtime::SessionListContext<S, #entity_name>;
    }
}

impl Context<'_> {
    fn result(&self, value: TokenStream) -> TokenStream {
        let Self {
            entity_name,
            runtime,
            ..
        } = self;
        quote! { #runtime::CrudResult<#value, Self::Session, #entity_name> }
    }

    /// Generate the `count` method.
    pub fn count_method(&self) -> TokenStream {
        let Self {
            entity_name,
            count_context,
            runtime,
            ..
        } = self;
        let result = self.result(quote! { u64 });

        quote! {
            /// Count entities matching the configured context.
            fn count<F>(&mut self, configure: F) -> #result
            where
                F: FnOnce(&mut #count_context<Self::Session>)
            {
                #runtime::crud::count::<#entity_name, _, _>(self.persistence_context(), configure)
            }
        }
    }

    /// Generate the `list` method.
    pub fn list_method(&self) -> TokenStream {
        let Self {
            entity_name,
            data,
            list_context,
            runtime,
            ..
        } = self;
        let result = self.result(quote! { ::std::vec::Vec<#data> });

        quote! {
            /// List entities matching the configured context, in query
            /// order.
            fn list<F>(&mut self, configure: F) -> #result
            where
                F: FnOnce(&mut #list_context<Self::Session>)
            {
                #runtime::crud::list::<#entity_name, #data, _, _>(self.persistence_context(), configure)
            }
        }
    }

    /// Generate the `create` method.
    pub fn create_method(&self) -> TokenStream {
        let Self {
            entity_name,
            data,
            runtime,
            ..
        } = self;
        let result = self.result(quote! { () });

        quote! {
            /// Persist a new entity from `data`, then refresh `data` with
            /// the stored state.
            fn create(&mut self, data: &mut #data) -> #result {
                #runtime::crud::create::<#entity_name, #data, _>(self.persistence_context(), data)
            }
        }
    }

    /// Generate `find`, `find_locked`, `try_find` and `try_find_locked`.
    pub fn find_methods(&self) -> TokenStream {
        self.locked_pair(
            "find",
            quote! { &mut },
            "Load the entity identified by `data` into `data`, failing with `NotFound` on a miss.",
            "Load the entity identified by `data` into `data`; `false` on a miss."
        )
    }

    /// Generate `update`, `update_locked`, `try_update` and
    /// `try_update_locked`.
    pub fn update_methods(&self) -> TokenStream {
        self.locked_pair(
            "update",
            quote! { &mut },
            "Apply the updatable fields of `data`, failing with `NotFound` on a miss.",
            "Apply the updatable fields of `data`; `false` on a miss."
        )
    }

    /// Generate `delete`, `delete_locked`, `try_delete` and
    /// `try_delete_locked`.
    pub fn delete_methods(&self) -> TokenStream {
        self.locked_pair(
            "delete",
            quote! { & },
            "Remove the entity identified by `data`, failing with `NotFound` on a miss.",
            "Remove the entity identified by `data`; `false` on a miss."
        )
    }

    /// Four methods for one identity operation: strict and `try_` forms,
    /// each with a `_locked` variant.
    fn locked_pair(
        &self,
        operation: &str,
        borrow: TokenStream,
        strict_doc: &str,
        try_doc: &str
    ) -> TokenStream {
        if !self.schema.has_identity() {
            return TokenStream::new();
        }

        let Self {
            entity_name,
            data,
            runtime,
            ..
        } = self;

        let strict = format_ident!("{}", operation);
        let strict_locked = format_ident!("{}_locked", operation);
        let attempt = format_ident!("try_{}", operation);
        let attempt_locked = format_ident!("try_{}_locked", operation);
        let unit = self.result(quote! { () });
        let flag = self.result(quote! { bool });
        let default_lock = quote! { #runtime::LockMode::Optimistic };

        quote! {
            #[doc = #strict_doc]
            fn #strict(&mut self, data: #borrow #data) -> #unit {
                self.#strict_locked(data, #default_lock)
            }

            #[doc = #strict_doc]
            fn #strict_locked(&mut self, data: #borrow #data, lock_mode: #runtime::LockMode) -> #unit {
                #runtime::crud::#strict::<#entity_name, #data, _>(self.persistence_context(), data, lock_mode)
            }

            #[doc = #try_doc]
            fn #attempt(&mut self, data: #borrow #data) -> #flag {
                self.#attempt_locked(data, #default_lock)
            }

            #[doc = #try_doc]
            fn #attempt_locked(&mut self, data: #borrow #data, lock_mode: #runtime::LockMode) -> #flag {
                #runtime::crud::#attempt::<#entity_name, #data, _>(self.persistence_context(), data, lock_mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn compact(tokens: &TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    fn generate_for(input: DeriveInput) -> String {
        let schema = EntitySchema::from_derive_input(&input).unwrap();
        compact(&generate(&schema))
    }

    fn employee() -> String {
        generate_for(syn::parse_quote! {
            pub struct Employee {
                #[id]
                pub id: i64,
                pub name: String,
            }
        })
    }

    fn tag() -> String {
        generate_for(syn::parse_quote! {
            pub struct Tag {
                pub label: String,
            }
        })
    }

    #[test]
    fn trait_requires_session_accessor() {
        let code = employee();
        assert!(code.contains("pubtraitEmployeeCrud{"));
        assert!(code.contains("typeSession:::crudgen::PersistenceSession<Employee>;"));
        assert!(code.contains("fnpersistence_context(&mutself)->&mutSelf::Session;"));
    }

    #[test]
    fn all_operations_with_identity() {
        let code = employee();
        for method in [
            "fncount<F>",
            "fnlist<F>",
            "fncreate(",
            "fnfind(",
            "fnfind_locked(",
            "fntry_find(",
            "fntry_find_locked(",
            "fnupdate(",
            "fnupdate_locked(",
            "fntry_update(",
            "fntry_update_locked(",
            "fndelete(",
            "fndelete_locked(",
            "fntry_delete(",
            "fntry_delete_locked("
        ] {
            assert!(code.contains(method), "missing {method}");
        }
    }

    #[test]
    fn no_identity_operations_without_identity() {
        let code = tag();
        assert!(code.contains("fncount<F>"));
        assert!(code.contains("fnlist<F>"));
        assert!(code.contains("fncreate("));
        for method in ["fnfind", "fntry_find", "fnupdate", "fntry_update", "fndelete", "fntry_delete"] {
            assert!(!code.contains(method), "unexpected {method}");
        }
    }

    #[test]
    fn default_lock_is_optimistic() {
        let code = employee();
        assert!(code.contains("self.find_locked(data,::crudgen::LockMode::Optimistic)"));
        assert!(code.contains("self.try_delete_locked(data,::crudgen::LockMode::Optimistic)"));
    }

    #[test]
    fn methods_delegate_to_runtime() {
        let code = employee();
        assert!(code.contains("::crudgen::crud::count::<Employee,_,_>(self.persistence_context(),configure)"));
        assert!(code.contains("::crudgen::crud::list::<Employee,EmployeeData,_,_>"));
        assert!(code.contains("::crudgen::crud::try_update::<Employee,EmployeeData,_>(self.persistence_context(),data,lock_mode)"));
    }

    #[test]
    fn delete_borrows_immutably() {
        let code = employee();
        assert!(code.contains("fndelete(&mutself,data:&EmployeeData)"));
        assert!(code.contains("fnupdate(&mutself,data:&mutEmployeeData)"));
    }

    #[test]
    fn context_aliases() {
        let code = employee();
        assert!(code.contains("pubtypeEmployeeCountContext<S>=::crudgen::SessionCountContext<S,Employee>;"));
        assert!(code.contains("pubtypeEmployeeListContext<S>=::crudgen::SessionListContext<S,Employee>;"));
    }

    #[test]
    fn custom_names_and_runtime() {
        let code = generate_for(syn::parse_quote! {
            #[entity(crud = "Users", transfer = "UserDto", crate = "crate::rt")]
            struct User {
                #[id]
                id: u32,
            }
        });
        assert!(code.contains("traitUsers{"));
        assert!(code.contains("data:&mutUserDto"));
        assert!(code.contains("crate::rt::crud::find::<User,UserDto,_>"));
    }
}
