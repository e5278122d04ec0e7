// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property descriptors.
//!
//! Each named field of an entity becomes one [`PropertyDescriptor`]:
//!
//! ```rust,ignore
//! #[id]                              // identity, never inserted or updated
//! pub id: i64,
//!
//! #[validate(length(min = 1))]       // PlainColumn, validations: [length]
//! pub name: String,
//!
//! #[relation]                        // RelationColumn { target: Employee }
//! pub manager: Option<Ref<Employee>>, // nullable
//!
//! #[auto]                            // generated, never inserted or updated
//! pub created: i64,
//! ```

use quote::format_ident;
use syn::{Field, GenericArgument, Ident, PathArguments, Type, ext::IdentExt};

use super::{
    column::ColumnConfig,
    validation::{ValidationRule, parse_validation_attrs}
};

/// Property type with `Option<T>` normalized away.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Declared type with one `Option` layer removed.
    pub inner: Type,

    /// Whether the declared type was `Option<inner>`.
    pub nullable: bool
}

impl TypeDescriptor {
    /// Normalize a declared field type.
    #[must_use]
    pub fn from_type(ty: &Type) -> Self {
        match generic_argument(ty, "Option") {
            Some(inner) => Self {
                inner:    inner.clone(),
                nullable: true
            },
            None => Self {
                inner:    ty.clone(),
                nullable: false
            }
        }
    }

    /// Declared type, `Option<inner>` when nullable.
    #[must_use]
    pub fn declared(&self) -> Type {
        let inner = &self.inner;
        if self.nullable {
            syn::parse_quote!(Option<#inner>)
        } else {
            inner.clone()
        }
    }
}

/// Storage category of a property.
#[derive(Debug, Clone)]
pub enum PropertyCategory {
    /// Ordinary stored value.
    PlainColumn,

    /// Foreign-key reference to another entity.
    RelationColumn {
        /// Referenced entity path (`T` in `Ref<T>`).
        target: syn::Path
    }
}

/// One property of an entity.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Field identifier.
    pub name: Ident,

    /// Normalized type.
    pub ty: TypeDescriptor,

    /// Storage category.
    pub category: PropertyCategory,

    /// Validation constraints in declaration order.
    pub validations: Vec<ValidationRule>,

    /// Marked `#[id]`.
    pub is_id: bool,

    /// Marked `#[auto]`.
    pub is_auto: bool,

    /// Whether `create` copies this property into the entity.
    pub insertable: bool,

    /// Whether `update` copies this property into the entity.
    pub updatable: bool
}

impl PropertyDescriptor {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// - Unnamed field
    /// - `#[relation]` on a type other than `Ref<T>` / `Option<Ref<T>>`
    /// - `#[id]` combined with `#[relation]`
    /// - Malformed `#[column]` or `#[validate]`
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let name = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;
        let ty = TypeDescriptor::from_type(&field.ty);
        let validations = parse_validation_attrs(&field.attrs)?;

        let mut is_id = false;
        let mut is_auto = false;
        let mut is_relation = false;
        let mut column = ColumnConfig::default();

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("auto") {
                is_auto = true;
            } else if attr.path().is_ident("relation") {
                is_relation = true;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
            }
        }

        let category = if is_relation {
            if is_id {
                return Err(darling::Error::custom("#[id] cannot be a #[relation]").with_span(field));
            }
            let target = relation_target(&ty.inner).ok_or_else(|| {
                darling::Error::custom(
                    "#[relation] requires a field of type Ref<Target> or Option<Ref<Target>>"
                )
                .with_span(&field.ty)
            })?;
            PropertyCategory::RelationColumn {
                target
            }
        } else {
            PropertyCategory::PlainColumn
        };

        let generated = is_id || is_auto;
        Ok(Self {
            name,
            ty,
            category,
            validations,
            is_id,
            is_auto,
            insertable: column.insertable && !generated,
            updatable: column.updatable && !generated
        })
    }

    /// Getter name (the property name).
    #[must_use]
    pub fn getter_name(&self) -> &Ident {
        &self.name
    }

    /// Setter name, `set_{name}`.
    #[must_use]
    pub fn setter_name(&self) -> Ident {
        format_ident!("set_{}", self.name.unraw())
    }

    /// Transfer object field name: `{name}_id` for relations, `name`
    /// otherwise.
    #[must_use]
    pub fn transfer_name(&self) -> Ident {
        match self.category {
            PropertyCategory::PlainColumn => self.name.clone(),
            PropertyCategory::RelationColumn {
                ..
            } => format_ident!("{}_id", self.name.unraw())
        }
    }

    /// Whether the property may be absent.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.ty.nullable
    }

    /// Referenced entity for relation columns.
    #[must_use]
    pub fn relation_target(&self) -> Option<&syn::Path> {
        match &self.category {
            PropertyCategory::PlainColumn => None,
            PropertyCategory::RelationColumn {
                target
            } => Some(target)
        }
    }
}

/// `T` in `Wrapper<T>` when the last path segment is `wrapper`.
fn generic_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

fn relation_target(ty: &Type) -> Option<syn::Path> {
    match generic_argument(ty, "Ref")? {
        Type::Path(target) if target.qself.is_none() => Some(target.path.clone()),
        _ => None
    }
}
