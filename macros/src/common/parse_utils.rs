//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use proc_macro2::{Group, Ident, Span, TokenStream, TokenTree};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A single check: `Type: BoolExpr`
///
/// Used in `traits_check!(String: Clone, &'static str: StringView)`.
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more checks, all of which must hold.
pub struct TypeCheckList {
    pub checks: Vec<TypeCheck>,
}

impl Parse for TypeCheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks: Vec<TypeCheck> = parse_comma_separated(input)?;
        if checks.is_empty() {
            return Err(input.error("expected at least one `Type: Expr` check"));
        }
        Ok(TypeCheckList { checks })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Token Rewriting
// =============================================================================

/// Replace every `Self` ident, including inside groups, with `with`.
pub fn replace_self(tokens: TokenStream, with: &str) -> TokenStream {
    tokens
        .into_iter()
        .map(|tt| match tt {
            TokenTree::Ident(ident) if ident == "Self" => {
                TokenTree::Ident(Ident::new(with, ident.span()))
            }
            TokenTree::Group(group) => {
                let mut replaced = Group::new(group.delimiter(), replace_self(group.stream(), with));
                replaced.set_span(group.span());
                TokenTree::Group(replaced)
            }
            other => other,
        })
        .collect()
}

/// Call-site identifier.
pub fn call_site_ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}
