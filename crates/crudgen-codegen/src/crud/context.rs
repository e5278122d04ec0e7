// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context for the CRUD trait.
//!
//! Contains the [`Context`] struct that precomputes all identifiers needed
//! by the method generators.

use quote::format_ident;
use syn::{Ident, Path, Visibility};

use crate::schema::EntitySchema;

/// Context for CRUD trait generation.
///
/// | Field | Example |
/// |-------|---------|
/// | `entity_name` | `Employee` |
/// | `trait_name` | `EmployeeCrud` |
/// | `data` | `EmployeeData` |
/// | `count_context` | `EmployeeCountContext` |
/// | `list_context` | `EmployeeListContext` |
/// | `runtime` | `::crudgen` |
pub struct Context<'a> {
    /// Parsed entity schema.
    pub schema: &'a EntitySchema,

    /// Visibility of generated items.
    pub vis: &'a Visibility,

    /// Entity struct name.
    pub entity_name: &'a Ident,

    /// CRUD trait name.
    pub trait_name: &'a Ident,

    /// Transfer object name.
    pub data: &'a Ident,

    /// Count context alias name.
    pub count_context: Ident,

    /// List context alias name.
    pub list_context: Ident,

    /// Runtime crate path.
    pub runtime: &'a Path
}

impl<'a> Context<'a> {
    /// Create a new generation context from an entity schema.
    pub fn new(schema: &'a EntitySchema) -> Self {
        let entity_name = schema.name();
        Self {
            schema,
            vis: &schema.vis,
            entity_name,
            trait_name: &schema.crud_interface_name,
            data: &schema.transfer_type_name,
            count_context: format_ident!("{}CountContext", entity_name),
            list_context: format_ident!("{}ListContext", entity_name),
            runtime: &schema.runtime
        }
    }
}
