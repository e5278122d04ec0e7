// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation attribute parsing.
//!
//! Every `#[validate(...)]` attribute on an entity field is split into
//! ordered [`ValidationRule`]s and re-emitted on the matching transfer
//! object field, where the `validator` derive reads them.
//!
//! | Source | Rules |
//! |--------|-------|
//! | `#[validate(email)]` | `email` |
//! | `#[validate(length(min = 1, max = 100))]` | `length(min = 1, max = 100)` |
//! | `#[validate(email, length(max = 255))]` | `email`, `length(max = 255)` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Expr, Ident};

/// One `key = value` argument of a validation rule.
#[derive(Debug, Clone)]
pub struct ValidationArg {
    /// Argument name (e.g., `min`).
    pub key: Ident,

    /// Argument value, kept as written.
    pub value: Expr
}

/// A single validation constraint attached to a property.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// Constraint name (e.g., `length`, `email`).
    pub name: Ident,

    /// Arguments in declaration order.
    pub args: Vec<ValidationArg>
}

impl ValidationRule {
    /// Render as a `#[validate(...)]` attribute.
    #[must_use]
    pub fn to_attribute(&self) -> TokenStream {
        let name = &self.name;
        if self.args.is_empty() {
            return quote! { #[validate(#name)] };
        }

        let args = self.args.iter().map(|arg| {
            let key = &arg.key;
            let value = &arg.value;
            quote! { #key = #value }
        });
        quote! { #[validate(#name(#(#args),*))] }
    }
}

/// Parse every `#[validate(...)]` attribute of a field in order.
///
/// # Errors
///
/// Returns an error for rules that are not `name` or `name(key = value, ..)`.
pub fn parse_validation_attrs(attrs: &[Attribute]) -> darling::Result<Vec<ValidationRule>> {
    let mut rules = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let name = meta
                .path
                .get_ident()
                .cloned()
                .ok_or_else(|| meta.error("validation rule must be a plain identifier"))?;

            let mut args = Vec::new();
            if meta.input.peek(syn::token::Paren) {
                meta.parse_nested_meta(|nested| {
                    let key = nested
                        .path
                        .get_ident()
                        .cloned()
                        .ok_or_else(|| nested.error("expected `key = value`"))?;
                    let value: Expr = nested.value()?.parse()?;
                    args.push(ValidationArg {
                        key,
                        value
                    });
                    Ok(())
                })?;
            } else if meta.input.peek(syn::Token![=]) {
                return Err(meta.error("use `name(key = value)` for validation arguments"));
            }

            rules.push(ValidationRule {
                name,
                args
            });
            Ok(())
        })?;
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_attrs(input: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(input).unwrap();
        item.fields.into_iter().next().unwrap().attrs
    }

    fn render(rule: &ValidationRule) -> String {
        rule.to_attribute().to_string().replace(' ', "")
    }

    #[test]
    fn parse_flag_rule() {
        let attrs = parse_attrs("struct T { #[validate(email)] f: String }");
        let rules = parse_validation_attrs(&attrs).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "email");
        assert!(rules[0].args.is_empty());
        assert_eq!(render(&rules[0]), "#[validate(email)]");
    }

    #[test]
    fn parse_rule_with_args_in_order() {
        let attrs = parse_attrs("struct T { #[validate(length(max = 100, min = 1))] f: String }");
        let rules = parse_validation_attrs(&attrs).unwrap();
        let keys: Vec<String> = rules[0].args.iter().map(|a| a.key.to_string()).collect();
        assert_eq!(keys, vec!["max", "min"]);
        assert_eq!(render(&rules[0]), "#[validate(length(max=100,min=1))]");
    }

    #[test]
    fn parse_multiple_attributes_keeps_declaration_order() {
        let attrs = parse_attrs(
            r#"struct T {
                #[validate(range(min = 18))]
                #[validate(custom(function = "check"), email)]
                f: i32
            }"#
        );
        let names: Vec<String> = parse_validation_attrs(&attrs)
            .unwrap()
            .iter()
            .map(|r| r.name.to_string())
            .collect();
        assert_eq!(names, vec!["range", "custom", "email"]);
    }

    #[test]
    fn ignore_other_attributes() {
        let attrs = parse_attrs("struct T { #[serde(rename = \"x\")] f: String }");
        assert!(parse_validation_attrs(&attrs).unwrap().is_empty());
    }

    #[test]
    fn reject_bare_key_value() {
        let attrs = parse_attrs("struct T { #[validate(regex = \"^a\")] f: String }");
        assert!(parse_validation_attrs(&attrs).is_err());
    }
}
