//! Member-function presence checks.
//!
//! `has_fn!(Type, name, fn(&self, u8) -> bool)` expands to a block that
//! resolves `<Type>::name` and asks whether the resolved function item
//! implements the `Fn` signature built from the description. When the
//! signature matches, a method call on the target then tells a method from
//! an associated function taking `Self` first.
//!
//! ## Totality
//!
//! A local trait implemented for every type supplies a same-named fallback
//! taking an uninhabited local enum. Inherent functions shadow it, so the
//! path always resolves: to the real member if there is one, to the
//! fallback otherwise. The fallback never satisfies a user signature.
//!
//! The method call only ever targets the type once the signature matched,
//! so its argument count is right. Before that it targets a local inert
//! type, and a local stand-in method answers when the member has no
//! receiver.
//!
//! ## Exactness
//!
//! The receiver is the first `Fn` argument (`self` → `__X`, `&self` →
//! `&__X`, `&mut self` → `&mut __X`). Parameter and return types must
//! match exactly; there are no coercions in trait selection.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token, Type,
};

use crate::common::replace_self;

/// Name standing in for the target type inside generated bounds.
const TARGET: &str = "__X";

// =============================================================================
// Signature Parsing: `fn(receiver?, args..) -> R`
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receiver {
    Value,
    Ref,
    RefMut,
}

pub struct Signature {
    pub receiver: Option<(Receiver, TokenStream)>,
    pub args: Vec<Type>,
    pub output: Option<Type>,
    /// Normalized tokens, re-emitted by the generators and shown in diagnostics.
    pub tokens: TokenStream,
}

impl Parse for Signature {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let fn_token: Token![fn] = input.parse()?;

        let content;
        syn::parenthesized!(content in input);

        let receiver = parse_receiver(&content)?;
        if receiver.is_some() && !content.is_empty() {
            content.parse::<Token![,]>()?;
        }

        let mut args = Vec::new();
        while !content.is_empty() {
            if content.peek(Token![self])
                || (content.peek(Token![&]) && content.peek2(Token![self]))
                || (content.peek(Token![&]) && content.peek2(Token![mut]) && content.peek3(Token![self]))
            {
                return Err(content.error("the receiver must be the first parameter"));
            }
            args.push(content.parse()?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        let output = if input.peek(Token![->]) {
            input.parse::<Token![->]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        let tokens = {
            let receiver = receiver.as_ref().map(|(_, tokens)| tokens);
            let comma = (receiver.is_some() && !args.is_empty()).then(<Token![,]>::default);
            let arrow = output.as_ref().map(|ty| quote! { -> #ty });
            quote! { #fn_token(#receiver #comma #(#args),*) #arrow }
        };
        Ok(Signature { receiver, args, output, tokens })
    }
}

fn parse_receiver(content: ParseStream) -> syn::Result<Option<(Receiver, TokenStream)>> {
    if content.peek(Token![self]) {
        let tok: Token![self] = content.parse()?;
        return Ok(Some((Receiver::Value, tok.into_token_stream())));
    }
    if content.peek(Token![&]) && content.peek2(Token![self]) {
        let amp: Token![&] = content.parse()?;
        let tok: Token![self] = content.parse()?;
        return Ok(Some((Receiver::Ref, quote! { #amp #tok })));
    }
    if content.peek(Token![&]) && content.peek2(Token![mut]) && content.peek3(Token![self]) {
        let amp: Token![&] = content.parse()?;
        let mutability: Token![mut] = content.parse()?;
        let tok: Token![self] = content.parse()?;
        return Ok(Some((Receiver::RefMut, quote! { #amp #mutability #tok })));
    }
    Ok(None)
}

impl Signature {
    /// `Fn(..) -> R` bound over `__X`.
    fn fn_bound(&self) -> TokenStream {
        let target = Ident::new(TARGET, Span::call_site());
        let receiver = self.receiver.as_ref().map(|(kind, _)| match kind {
            Receiver::Value => quote! { #target },
            Receiver::Ref => quote! { &#target },
            Receiver::RefMut => quote! { &mut #target },
        });
        let args = self.args.iter().map(|ty| replace_self(ty.to_token_stream(), TARGET));
        let inputs: Vec<TokenStream> = receiver.into_iter().chain(args).collect();
        let output = match &self.output {
            Some(ty) => replace_self(ty.to_token_stream(), TARGET),
            None => quote! { () },
        };
        quote! { ::core::ops::Fn(#(#inputs),*) -> #output }
    }

    /// `?Sized` unless `Self` is moved: a by-value receiver, or `Self` used
    /// anywhere but directly behind a reference or pointer.
    fn target_bound(&self) -> TokenStream {
        let moves_self = matches!(self.receiver, Some((Receiver::Value, _)))
            || self.args.iter().any(needs_sized)
            || self.output.as_ref().is_some_and(needs_sized);
        if moves_self {
            quote! {}
        } else {
            quote! { : ?Sized }
        }
    }

    /// The operand method-call syntax would take, with the arguments after it.
    ///
    /// A receiver is the operand. Without one, a leading `Self`, `&Self` or
    /// `&mut Self` parameter is, since a method taking it would match too.
    fn operand(&self) -> Option<(Receiver, &[Type])> {
        match &self.receiver {
            Some((kind, _)) => Some((*kind, &self.args[..])),
            None => {
                let (first, rest) = self.args.split_first()?;
                Some((self_operand(first)?, rest))
            }
        }
    }

    fn display(&self) -> String {
        let text = self.tokens.to_string();
        text.replace('{', "{{").replace('}', "}}")
    }
}

fn mentions_self(tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tt| match tt {
        proc_macro2::TokenTree::Ident(ident) => ident == "Self",
        proc_macro2::TokenTree::Group(group) => mentions_self(group.stream()),
        _ => false,
    })
}

fn is_self(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident("Self"),
        Type::Paren(inner) => is_self(&inner.elem),
        _ => false,
    }
}

fn needs_sized(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) if is_self(&reference.elem) => false,
        Type::Ptr(pointer) if is_self(&pointer.elem) => false,
        other => mentions_self(other.to_token_stream()),
    }
}

/// `Self`, `&Self` or `&mut Self` as a receiver form.
fn self_operand(ty: &Type) -> Option<Receiver> {
    match ty {
        Type::Reference(reference) if is_self(&reference.elem) => match reference.mutability {
            Some(_) => Some(Receiver::RefMut),
            None => Some(Receiver::Ref),
        },
        Type::Paren(inner) => self_operand(&inner.elem),
        other if is_self(other) => Some(Receiver::Value),
        _ => None,
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// `Type, name, fn(..) -> R`
pub struct MemberCheck {
    pub ty: Type,
    pub name: Ident,
    pub sig: Signature,
}

impl Parse for MemberCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![,]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let sig: Signature = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(MemberCheck { ty, name, sig })
    }
}

/// `check_name, member, fn(..) -> R`
pub struct DefineCheck {
    pub check: Ident,
    pub name: Ident,
    pub sig: Signature,
}

impl Parse for DefineCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let check: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let sig: Signature = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(DefineCheck { check, name, sig })
    }
}

// =============================================================================
// Expansion
// =============================================================================

/// Local fallback making `<T>::name` resolve for every `T`.
fn absent_fallback(name: &Ident) -> TokenStream {
    quote! {
        #[allow(dead_code)]
        enum __Missing {}
        #[allow(dead_code, non_snake_case)]
        trait __Absent {
            fn #name(missing: __Missing) -> __Missing {
                missing
            }
        }
        impl<__X: ?Sized> __Absent for __X {}
    }
}

/// `__Probe<F, X>` over the resolved function `F`. Its inherent methods
/// apply when `F` has the signature; the `__Mismatch` ones otherwise.
/// `__receiver` hands the target to the method-call step, or the inert
/// `__Elsewhere` when the signature already failed.
fn signature_probe(sig: &Signature) -> TokenStream {
    let target = Ident::new(TARGET, Span::call_site());
    let target_bound = sig.target_bound();
    let fn_bound = sig.fn_bound();

    quote! {
        #[allow(dead_code)]
        struct __Probe<__F, #target: ?Sized>(__F, ::core::marker::PhantomData<*const #target>);

        #[allow(dead_code)]
        struct __Elsewhere;

        // Low priority: any resolved function.
        #[allow(dead_code)]
        trait __Mismatch {
            fn __matches(&self) -> bool {
                false
            }
            fn __receiver(&self) -> ::core::marker::PhantomData<__Elsewhere> {
                ::core::marker::PhantomData
            }
        }
        impl<__F, #target: ?Sized> __Mismatch for &__Probe<__F, #target> {}

        // High priority: the resolved function has the exact signature.
        #[allow(dead_code)]
        impl<__F: #fn_bound, #target #target_bound> __Probe<__F, #target> {
            #[inline]
            fn __matches(&self) -> bool {
                true
            }
            fn __receiver(&self) -> ::core::marker::PhantomData<#target> {
                ::core::marker::PhantomData
            }
        }
    }
}

/// Items for the method-call step.
///
/// `__StandIn` gives every type a method `name` in the operand's receiver
/// form, returning `__NotMethod`. A real method on the operand shadows it,
/// so the call's result type tells a method from an associated function.
/// `require` adds a bound the stand-in must satisfy to be picked.
fn method_call(name: &Ident, operand: Receiver, rest: usize, require: Option<&Ident>) -> TokenStream {
    let receiver = match operand {
        Receiver::Value => quote! { self },
        Receiver::Ref => quote! { &self },
        Receiver::RefMut => quote! { &mut self },
    };
    let params = (0..rest).map(|_| quote! { _: () });
    let mut bounds = Vec::new();
    if operand == Receiver::Value {
        bounds.push(quote! { Self: ::core::marker::Sized });
    }
    if let Some(bound) = require {
        bounds.push(quote! { Self: #bound });
    }
    let where_clause = (!bounds.is_empty()).then(|| quote! { where #(#bounds),* });

    let operand_fn = match operand {
        Receiver::Value => quote! {
            fn __operand<__T>(_: ::core::marker::PhantomData<__T>) -> __T {
                ::core::unreachable!()
            }
        },
        Receiver::Ref => quote! {
            fn __operand<'__a, __T: ?Sized>(_: ::core::marker::PhantomData<__T>) -> &'__a __T {
                ::core::unreachable!()
            }
        },
        Receiver::RefMut => quote! {
            fn __operand<'__a, __T: ?Sized>(_: ::core::marker::PhantomData<__T>) -> &'__a mut __T {
                ::core::unreachable!()
            }
        },
    };

    quote! {
        #[allow(dead_code)]
        struct __NotMethod;

        #[allow(dead_code, non_snake_case)]
        trait __StandIn {
            fn #name(#receiver #(, #params)*) -> __NotMethod #where_clause {
                __NotMethod
            }
        }
        impl<__T: ?Sized> __StandIn for __T {}

        #[allow(dead_code)]
        #operand_fn

        #[allow(dead_code)]
        fn __any<__T>() -> __T {
            ::core::unreachable!()
        }

        #[allow(dead_code)]
        fn __output<__O, __C: ::core::ops::FnOnce() -> __O>(_: &__C) -> ::core::marker::PhantomData<__O> {
            ::core::marker::PhantomData
        }
    }
}

/// Never-called closure invoking `name` on the probe's receiver.
fn method_call_closure(name: &Ident, rest: usize) -> TokenStream {
    let args = (0..rest).map(|_| quote! { __any() });
    quote! {
        || __operand((&__probe).__receiver()).#name(#(#args),*)
    }
}

/// `has_fn!(Type, name, fn(..) -> R)` → `bool`
pub fn expand_has_fn(input: MemberCheck) -> TokenStream {
    let MemberCheck { ty, name, sig } = input;
    let fallback = absent_fallback(&name);
    let probe = signature_probe(&sig);

    let kind = sig.operand().map(|(operand, rest)| {
        let items = method_call(&name, operand, rest.len(), None);
        let call = method_call_closure(&name, rest.len());
        let verdict = match sig.receiver {
            Some(_) => quote! { __is_method },
            None => quote! { !__is_method },
        };
        quote! {
            && {
                #items

                struct __Kind<__O>(::core::marker::PhantomData<__O>);
                impl __Kind<__NotMethod> {
                    fn __is_method(&self) -> bool {
                        false
                    }
                }
                #[allow(dead_code)]
                trait __Called {
                    fn __is_method(&self) -> bool {
                        true
                    }
                }
                impl<__O> __Called for &__Kind<__O> {}

                let __call = #call;
                let __is_method = (&__Kind(__output(&__call))).__is_method();
                #verdict
            }
        }
    });

    quote! {
        {
            #probe

            let __probe = __Probe::<_, #ty>(
                {
                    #fallback
                    <#ty>::#name
                },
                ::core::marker::PhantomData,
            );

            (&__probe).__matches() #kind
        }
    }
}

/// `assert_has_fn!(Type, name, fn(..) -> R);` → item that fails to compile
/// when the member is missing, differs, or is of the other kind.
pub fn expand_assert_has_fn(input: MemberCheck) -> TokenStream {
    let MemberCheck { ty, name, sig } = input;
    let fallback = absent_fallback(&name);
    let probe = signature_probe(&sig);
    let target = Ident::new(TARGET, Span::call_site());
    let target_bound = sig.target_bound();
    let fn_bound = sig.fn_bound();
    let message = format!(
        "`{{{}}}` has no associated fn `{}` with signature `{}`",
        TARGET,
        name,
        sig.display()
    );
    let label = format!("`{}` is missing or has a different signature", name);
    let shown = ty.to_token_stream().to_string().replace('{', "{{").replace('}', "}}");

    let kind = sig.operand().map(|(operand, rest)| {
        let call = method_call_closure(&name, rest.len());
        if sig.receiver.is_some() {
            let bound = Ident::new("__IsMethod", Span::call_site());
            let items = method_call(&name, operand, rest.len(), Some(&bound));
            let message = format!("`{}::{}` is an associated function, not a method", shown, name);
            quote! {
                {
                    #[diagnostic::on_unimplemented(message = #message, label = "called with method syntax here")]
                    trait __IsMethod {}
                    impl __IsMethod for __Elsewhere {}

                    #items

                    let _call = #call;
                }
            }
        } else {
            let items = method_call(&name, operand, rest.len(), None);
            let message = format!("`{}::{}` is a method, not an associated function", shown, name);
            quote! {
                {
                    #[diagnostic::on_unimplemented(message = #message, label = "reachable with method syntax")]
                    trait __IsAssociated {}
                    impl __IsAssociated for __NotMethod {}

                    fn __associated<__O: __IsAssociated>(_: ::core::marker::PhantomData<__O>) {}

                    #items

                    let __call = #call;
                    __associated(__output(&__call));
                }
            }
        }
    });

    quote! {
        const _: () = {
            #fallback
            #probe

            #[diagnostic::on_unimplemented(message = #message, label = #label)]
            trait __HasMember<#target: ?Sized> {}
            impl<__F: #fn_bound, #target #target_bound> __HasMember<#target> for __F {}

            fn __require<#target: ?Sized, __F: __HasMember<#target>>(_: __F) {}

            #[allow(dead_code)]
            fn __witness() {
                __require::<#ty, _>(<#ty>::#name);
                let __probe = __Probe::<_, #ty>(<#ty>::#name, ::core::marker::PhantomData);
                #kind
            }
        };
    }
}

/// Which receiver form a generator accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Static,
    Method,
}

/// `define_has_static_fn!` / `define_has_method!` → local `check_name!(Type)`
pub fn expand_define_check(input: DefineCheck, kind: MemberKind) -> syn::Result<TokenStream> {
    let DefineCheck { check, name, sig } = input;

    match (kind, &sig.receiver) {
        (MemberKind::Static, Some((_, tokens))) => {
            return Err(syn::Error::new_spanned(
                tokens,
                "a static member has no receiver; use `define_has_method!` for methods",
            ));
        }
        (MemberKind::Method, None) => {
            return Err(syn::Error::new_spanned(
                &sig.tokens,
                "a method signature starts with `self`, `&self` or `&mut self`; \
                 use `define_has_static_fn!` for associated functions",
            ));
        }
        _ => {}
    }

    let sig_tokens = &sig.tokens;
    Ok(quote! {
        #[allow(unused_macros)]
        macro_rules! #check {
            ($target:ty) => {
                ::tola_traits::has_fn!($target, #name, #sig_tokens)
            };
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(s: &str) -> Signature {
        syn::parse_str(s).unwrap()
    }

    fn squash(tokens: TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn test_static_signature() {
        let s = sig("fn(u8, &str) -> Option<Self>");
        assert!(s.receiver.is_none());
        assert_eq!(s.args.len(), 2);
        assert_eq!(
            squash(s.fn_bound()),
            "::core::ops::Fn(u8,&str)->Option<__X>"
        );
    }

    #[test]
    fn test_method_signature() {
        let s = sig("fn(&mut self, usize)");
        assert_eq!(s.receiver.as_ref().map(|r| r.0), Some(Receiver::RefMut));
        assert_eq!(squash(s.fn_bound()), "::core::ops::Fn(&mut__X,usize)->()");
        assert_eq!(squash(s.target_bound()), ":?Sized");

        let s = sig("fn(self) -> Self");
        assert_eq!(squash(s.fn_bound()), "::core::ops::Fn(__X)->__X");
        assert!(s.target_bound().is_empty());

        let s = sig("fn(&self) -> Option<Self>");
        assert!(s.target_bound().is_empty());
    }

    #[test]
    fn test_self_behind_reference_stays_unsized() {
        assert_eq!(squash(sig("fn(&Self, *const Self) -> &Self").target_bound()), ":?Sized");
        assert!(sig("fn(Self) -> usize").target_bound().is_empty());
        assert!(sig("fn(&self, Vec<Self>)").target_bound().is_empty());
    }

    #[test]
    fn test_method_call_operand() {
        let operand = |s: &str| {
            let parsed = sig(s);
            parsed.operand().map(|(kind, rest)| (kind, rest.len()))
        };
        assert_eq!(operand("fn(&mut self, u8)"), Some((Receiver::RefMut, 1)));
        assert_eq!(operand("fn(&Self) -> usize"), Some((Receiver::Ref, 0)));
        assert_eq!(operand("fn(&mut Self, u8)"), Some((Receiver::RefMut, 1)));
        assert_eq!(operand("fn(Self, Self) -> Self"), Some((Receiver::Value, 1)));
        assert_eq!(operand("fn(usize) -> Self"), None);
        assert_eq!(operand("fn(Box<Self>)"), None);
        assert_eq!(operand("fn() -> Self"), None);
    }

    #[test]
    fn test_kind_step_follows_operand() {
        let expand = |s: &str| squash(expand_has_fn(syn::parse_str(s).unwrap()));

        let associated = expand("Widget, new, fn(usize) -> Self");
        assert!(!associated.contains("__StandIn"));

        let method = expand("Widget, size, fn(&self) -> usize");
        assert!(method.contains("fnsize(&self)->__NotMethod"));
        assert!(method.contains("__is_method}"));

        let taking_self = expand("Widget, merge, fn(Self, Self) -> Self");
        assert!(taking_self.contains("fnmerge(self,_:())->__NotMethodwhereSelf:::core::marker::Sized"));
        assert!(taking_self.contains("!__is_method"));
    }

    #[test]
    fn test_receiver_position() {
        assert!(syn::parse_str::<Signature>("fn(u8, &self)").is_err());
    }

    #[test]
    fn test_signature_tokens_are_normalized() {
        let s = sig("fn(&self, u8,) -> bool");
        assert_eq!(squash(s.tokens.clone()), "fn(&self,u8)->bool");
    }

    #[test]
    fn test_generator_receiver_rules() {
        let with_receiver: DefineCheck = syn::parse_str("has_len, len, fn(&self) -> usize").unwrap();
        assert!(expand_define_check(with_receiver, MemberKind::Static).is_err());

        let without: DefineCheck = syn::parse_str("has_new, new, fn() -> Self").unwrap();
        assert!(expand_define_check(without, MemberKind::Method).is_err());

        let ok: DefineCheck = syn::parse_str("has_new, new, fn() -> Self").unwrap();
        let out = squash(expand_define_check(ok, MemberKind::Static).unwrap());
        assert!(out.contains("macro_ruleshas_new"));
        assert!(out.contains("::tola_traits::has_fn!($target,new,fn()->Self)"));
    }
}
