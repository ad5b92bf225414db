// Boolean expression parsing and evaluation for trait predicates

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Trait(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Trait(ty))
    }
}

// =============================================================================
// Crate Vocabulary
// =============================================================================

/// Predicate traits of the runtime crate, usable in `traits_check!` without
/// an import.
const TEXT_TRAITS: &[&str] = &[
    "CharUnit",
    "StringLike",
    "OwnedString",
    "StringView",
    "CharPointer",
    "CharArray",
    "Textual",
    "CompatibleString",
    "CompatibleChar",
];

const PRIMITIVE_TRAITS: &[&str] = &["Tuple"];

/// Qualify a bare crate predicate name (`StringLike`, `CompatibleString<B>`)
/// with its module. Everything else is passed through untouched.
pub fn resolve_trait(trait_ty: &Type) -> TokenStream {
    let Type::Path(tp) = trait_ty else {
        return quote! { #trait_ty };
    };
    if tp.qself.is_some() || tp.path.leading_colon.is_some() || tp.path.segments.len() != 1 {
        return quote! { #trait_ty };
    }
    let segment = &tp.path.segments[0];
    let name = segment.ident.to_string();
    let module = if TEXT_TRAITS.contains(&name.as_str()) {
        "text"
    } else if PRIMITIVE_TRAITS.contains(&name.as_str()) {
        "primitives"
    } else {
        return quote! { #trait_ty };
    };
    let module = Ident::new(module, Span::call_site());
    quote! { ::tola_traits::#module::#segment }
}

// =============================================================================
// traits_check! Implementation (Inherent Const Fallback)
// =============================================================================

/// Generate the check for one `Type: Expr` clause.
///
/// Each atomic trait becomes a local probe whose inherent `VAL` shadows the
/// fallback's `false` when the bound holds. Operators are applied to the
/// resulting `bool`s, so the whole expression stays a `const` expression.
pub fn generate_probe_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    let probe_body = generate_probe_body(expr, ty);
    quote! {
        {
            let _ = ::core::marker::PhantomData::<#ty>;
            #probe_body
        }
    }
}

fn generate_probe_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Trait(trait_ty) => generate_single_probe(trait_ty, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single probe check for one trait
fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    let bound = resolve_trait(trait_ty);
    quote! {
        {
            #[allow(dead_code)]
            trait __ProbeFallback { const VAL: bool = false; }
            #[allow(dead_code)]
            struct __Probe<__X: ?Sized>(::core::marker::PhantomData<*const __X>);
            impl<__X: ?Sized> __ProbeFallback for __Probe<__X> {}
            #[allow(dead_code)]
            impl<__X: ?Sized + #bound> __Probe<__X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> BoolExpr {
        syn::parse_str(s).expect("valid expression")
    }

    fn render(expr: &BoolExpr) -> String {
        match expr {
            BoolExpr::Trait(ty) => resolve_trait(ty).to_string().replace(' ', ""),
            BoolExpr::And(l, r) => format!("({}&{})", render(l), render(r)),
            BoolExpr::Or(l, r) => format!("({}|{})", render(l), render(r)),
            BoolExpr::Not(o) => format!("!{}", render(o)),
        }
    }

    #[test]
    fn test_generic_does_not_shadow_user_types() {
        let trait_ty: Type = syn::parse_str("PartialEq<X>").expect("valid trait");
        let ty: Type = syn::parse_str("u8").expect("valid type");
        let code = generate_single_probe(&trait_ty, &ty).to_string().replace(' ', "");
        assert!(code.contains("impl<__X:?Sized+PartialEq<X>>"));
        assert!(!code.contains("<X:"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(render(&parse("Clone | Copy & Debug")), "(Clone|(Copy&Debug))");
        assert_eq!(render(&parse("!(Clone | Copy)")), "!(Clone|Copy)");
    }

    #[test]
    fn test_vocabulary_is_qualified() {
        assert_eq!(
            render(&parse("StringLike & !Tuple")),
            "(::tola_traits::text::StringLike&!::tola_traits::primitives::Tuple)"
        );
        assert_eq!(
            render(&parse("CompatibleString<&'static str>")),
            "::tola_traits::text::CompatibleString<&'staticstr>"
        );
        // Qualified paths are left alone.
        assert_eq!(render(&parse("core::hash::Hash")), "core::hash::Hash");
    }
}
