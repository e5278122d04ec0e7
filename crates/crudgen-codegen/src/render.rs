// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text rendering of generated artifacts.
//!
//! Tokens are re-parsed into a `syn::File` and formatted with
//! `prettyplease`, so the same schema always yields byte-identical text.
//! Each unit starts with an origin marker:
//!
//! ```text
//! // Origin: hr::Employee
//!
//! impl ::crudgen::Entity for Employee {
//!     const NAME: &'static str = "hr::Employee";
//! }
//! ...
//! /// Transfer object for [`Employee`].
//! #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
//! pub struct EmployeeData {
//! ...
//! ```

use proc_macro2::TokenStream;

use crate::{GenerateError, crud, provider::SchemaProvider, schema::EntitySchema};

/// Render the transfer object of `schema` as Rust source, together with
/// the `Entity` and `Identified` impls it relies on.
///
/// # Errors
///
/// [`GenerateError::Render`] if the generated tokens do not parse as a file.
pub fn render_transfer_object(
    schema: &EntitySchema,
    provider: &dyn SchemaProvider
) -> Result<String, GenerateError> {
    render(schema, crate::generate_transfer_object(schema, provider))
}

/// Render the CRUD trait of `schema` as Rust source.
///
/// # Errors
///
/// [`GenerateError::Render`] if the generated tokens do not parse as a file.
pub fn render_crud_interface(schema: &EntitySchema) -> Result<String, GenerateError> {
    render(schema, crud::generate(schema))
}

fn render(schema: &EntitySchema, tokens: TokenStream) -> Result<String, GenerateError> {
    let file: syn::File = syn::parse2(tokens).map_err(GenerateError::Render)?;
    Ok(format!(
        "// Origin: {}\n\n{}",
        schema.qualified_name,
        prettyplease::unparse(&file)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SchemaRegistry;

    const SOURCE: &str = r#"
        pub mod hr {
            #[derive(Entity, Clone, Default)]
            pub struct Employee {
                #[id]
                pub id: i64,
                #[validate(length(min = 1))]
                pub name: String,
                pub salary: Option<f64>,
                #[relation]
                pub manager: Option<Ref<Employee>>,
            }

            #[derive(Entity, Clone, Default)]
            pub struct Badge {
                pub code: String,
                #[relation]
                pub owner: Option<Ref<Badge>>,
            }
        }
    "#;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_source(SOURCE).unwrap()
    }

    #[test]
    fn employee_transfer_object() {
        let registry = registry();
        let schema = registry.get("hr::Employee").unwrap();
        let text = render_transfer_object(schema, &registry).unwrap();

        assert!(text.starts_with("// Origin: hr::Employee\n\n"));
        assert!(text.contains("impl ::crudgen::Entity for Employee {"));
        assert!(text.contains("const NAME: &'static str = \"hr::Employee\";"));
        assert!(text.contains("impl ::crudgen::Identified for Employee {"));
        assert!(text.contains("pub struct EmployeeData {"));
        assert!(text.contains("id: i64,"));
        assert!(text.contains("salary: Option<f64>,"));
        assert!(text.contains("manager_id: Option<i64>,"));
        assert!(!text.contains("manager: "));

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let name = lines.iter().position(|l| *l == "name: String,").unwrap();
        assert!(lines[name - 1].starts_with("#[validate(length("));
    }

    #[test]
    fn employee_crud_interface() {
        let registry = registry();
        let schema = registry.get("hr::Employee").unwrap();
        let text = render_crud_interface(schema).unwrap();

        assert!(text.starts_with("// Origin: hr::Employee\n\n"));
        assert!(text.contains("pub trait EmployeeCrud {"));
        for method in [
            "fn find(",
            "fn try_find(",
            "fn update(",
            "fn try_update(",
            "fn delete(",
            "fn try_delete("
        ] {
            assert!(text.contains(method), "missing {method}");
        }
    }

    #[test]
    fn self_relation_without_identity_is_omitted() {
        let registry = registry();
        let schema = registry.get("Badge").unwrap();
        let first = render_transfer_object(schema, &registry).unwrap();
        let second = render_transfer_object(schema, &registry).unwrap();

        assert!(!first.contains("owner_id"));
        assert!(!first.contains("IdentifiedTransfer"));
        assert!(first.contains("impl ::crudgen::Entity for Badge {"));
        assert!(!first.contains("Identified for Badge"));
        assert_eq!(first, second);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = registry();
        let b = registry();
        let schema_a = a.get("Employee").unwrap();
        let schema_b = b.get("Employee").unwrap();

        assert_eq!(
            render_transfer_object(schema_a, &a).unwrap(),
            render_transfer_object(schema_b, &b).unwrap()
        );
        assert_eq!(
            render_crud_interface(schema_a).unwrap(),
            render_crud_interface(schema_b).unwrap()
        );
    }

    #[test]
    fn crud_without_identity() {
        let registry = registry();
        let text = render_crud_interface(registry.get("Badge").unwrap()).unwrap();
        assert!(text.contains("fn count<F>("));
        assert!(text.contains("fn create("));
        assert!(!text.contains("fn find"));
        assert!(!text.contains("fn delete"));
    }
}
