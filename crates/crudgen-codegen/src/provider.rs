// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema providers.
//!
//! The transfer-object generator flattens every relation property to the
//! identity type of the referenced entity. A [`SchemaProvider`] answers that
//! lookup.
//!
//! | Provider | Used by | Foreign targets resolve to |
//! |----------|---------|----------------------------|
//! | [`DeclarationProvider`] | `#[derive(Entity)]` | `<Target as Identified>::Id` |
//! | [`SchemaRegistry`] | text rendering | the target schema's `#[id]` type |
//!
//! `None` means the target has no identity property; the relation is then
//! omitted from the transfer object.

use syn::{Item, Type};
use tracing::debug;

use crate::{GenerateError, schema::EntitySchema};

/// Resolves relation targets to identity types.
pub trait SchemaProvider {
    /// Identity type of the entity `target` referenced from `origin`, or
    /// `None` when the target has no identity property.
    fn identity_type(&self, origin: &EntitySchema, target: &syn::Path) -> Option<Type>;
}

/// Whether `target` names `origin` itself (`Self` or the entity ident).
fn is_self_reference(origin: &EntitySchema, target: &syn::Path) -> bool {
    target.is_ident("Self") || target.is_ident(origin.name())
}

/// Provider for macro expansion, where only the annotated struct is visible.
///
/// Self references resolve to the entity's own identity type. Other targets
/// resolve through the runtime `Identified` trait, so the compiler checks
/// that the target has an identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationProvider;

impl SchemaProvider for DeclarationProvider {
    fn identity_type(&self, origin: &EntitySchema, target: &syn::Path) -> Option<Type> {
        if is_self_reference(origin, target) {
            return origin.identity_type().cloned();
        }
        let runtime = &origin.runtime;
        Some(syn::parse_quote!(<#target as #runtime::Identified>::Id))
    }
}

/// Set of schemas parsed from source, resolving targets among themselves.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: Vec<EntitySchema>
}

impl SchemaRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every `#[derive(Entity)]` struct of a Rust source file.
    ///
    /// Structs inside inline modules get the module path as their package
    /// unless `#[entity(module = "..")]` overrides it.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Parse`] for invalid Rust, [`GenerateError::Schema`]
    /// for invalid entity declarations or malformed `#[derive(..)]` lists.
    pub fn from_source(source: &str) -> Result<Self, GenerateError> {
        let file = syn::parse_file(source)?;
        let mut registry = Self::new();
        registry.collect(&file.items, &mut Vec::new())?;
        debug!(entities = registry.schemas.len(), "parsed source");
        Ok(registry)
    }

    fn collect(&mut self, items: &[Item], path: &mut Vec<String>) -> Result<(), GenerateError> {
        for item in items {
            match item {
                Item::Struct(item) => {
                    if !derives_entity(&item.attrs)? {
                        continue;
                    }
                    let input = syn::DeriveInput::from(item.clone());
                    let schema =
                        EntitySchema::from_derive_input(&input)?.with_default_package(&path.join("::"));
                    self.insert(schema);
                }
                Item::Mod(module) => {
                    if let Some((_, items)) = &module.content {
                        path.push(module.ident.to_string());
                        self.collect(items, path)?;
                        path.pop();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Add a schema, replacing one with the same qualified name.
    pub fn insert(&mut self, schema: EntitySchema) {
        match self
            .schemas
            .iter_mut()
            .find(|s| s.qualified_name == schema.qualified_name)
        {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema)
        }
    }

    /// Look up by qualified name (`hr::Employee`) or bare ident
    /// (`Employee`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.schemas
            .iter()
            .find(|s| s.qualified_name == name)
            .or_else(|| self.schemas.iter().find(|s| s.ident == name))
    }

    /// Schemas in source order.
    pub fn iter(&self) -> impl Iterator<Item = &EntitySchema> {
        self.schemas.iter()
    }

    /// Number of schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry holds no schemas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaProvider for SchemaRegistry {
    fn identity_type(&self, origin: &EntitySchema, target: &syn::Path) -> Option<Type> {
        if is_self_reference(origin, target) {
            return origin.identity_type().cloned();
        }
        let (name, anchored) = target_name(origin, target);
        let found = if anchored {
            self.schemas.iter().find(|s| s.qualified_name == name)
        } else {
            self.get(&name)
        };
        let Some(schema) = found else {
            debug!(origin = %origin.qualified_name, target = %name, "unknown relation target");
            return None;
        };
        let resolved = schema.identity_type().cloned();
        if resolved.is_none() {
            debug!(origin = %origin.qualified_name, target = %name, "relation target has no identity");
        }
        resolved
    }
}

/// Registry key for `target` as written inside `origin`'s module, and
/// whether it is a full qualified name.
///
/// `crate::` paths are absolute, `self::` and `super::` are relative to
/// the origin package; any other path is looked up as written.
fn target_name(origin: &EntitySchema, target: &syn::Path) -> (String, bool) {
    let mut segments = target.segments.iter().map(|s| s.ident.to_string()).peekable();
    let mut package: Vec<String> = origin
        .package_name
        .split("::")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let mut anchored = false;
    if segments.peek().is_some_and(|s| s == "crate") {
        segments.next();
        package.clear();
        anchored = true;
    }
    while let Some(segment) = segments.peek() {
        match segment.as_str() {
            "self" => {}
            "super" => {
                package.pop();
            }
            _ => break
        }
        anchored = true;
        segments.next();
    }

    let rest = segments.collect::<Vec<_>>();
    if anchored {
        package.extend(rest);
        (package.join("::"), true)
    } else {
        (rest.join("::"), false)
    }
}

/// Whether `#[derive(..)]` lists `Entity` (bare or path-qualified).
fn derives_entity(attrs: &[syn::Attribute]) -> Result<bool, GenerateError> {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.segments.last().is_some_and(|s| s.ident == "Entity") {
                found = true;
            }
            Ok(())
        })
        .map_err(|err| GenerateError::Schema(darling::Error::from(err)))?;
    }
    Ok(found)
}
