//! Procedural macros for tola-traits predicates
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `traits_check!` | expression | Boolean trait expressions per type |
//! | `has_fn!` | expression | Member function presence with exact signature |
//! | `assert_has_fn!` | item | Same, as a compile-time requirement |
//! | `define_has_static_fn!` | item | Declare a named associated-fn check |
//! | `define_has_method!` | item | Declare a named method check |
//!
//! ## Example
//!
//! ```ignore
//! struct Buffer;
//! impl Buffer {
//!     fn len(&self) -> usize { 0 }
//! }
//!
//! assert!(traits_check!(&'static str: StringView & !OwnedString));
//! assert!(has_fn!(Buffer, len, fn(&self) -> usize));
//!
//! define_has_method!(has_len, len, fn(&self) -> usize);
//! assert!(has_len!(Buffer));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `Tuple` and `TupleElement<N>` impls for arities `0..=n`.
///
/// # Usage
/// ```ignore
/// impl_tuples!(12);
/// ```
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuples::TuplesInput);
    inner::tuples::expand_tuples(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Check trait predicates on concrete types with boolean expressions.
///
/// The result is a `const` expression. Crate predicates (`CharUnit`,
/// `StringLike`, `OwnedString`, `StringView`, `CharPointer`, `CharArray`,
/// `Textual`, `Tuple`, `CompatibleString<B>`, `CompatibleChar<B>`) need no
/// import; any other trait path is used as written.
///
/// ```ignore
/// use tola_traits::traits_check;
///
/// // Single check
/// assert!(traits_check!(String: Clone));
/// assert!(!traits_check!(String: Copy));
///
/// // Boolean expressions
/// assert!(traits_check!(&'static str: StringView | CharArray));
/// assert!(traits_check!(Vec<char>: OwnedString & !Tuple));
///
/// // Multiple checks (all must pass)
/// assert!(traits_check!(String: Clone, (u8, u8): Tuple));
///
/// // In const position
/// const OK: bool = traits_check!([char; 2]: CompatibleString<&'static [char]>);
/// ```
///
/// Bounds inside the expression need explicit lifetimes
/// (`PartialEq<&'static str>`, not `PartialEq<&str>`).
#[proc_macro]
pub fn traits_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::TypeCheckList);
    expand_traits_check(input).into()
}

fn expand_traits_check(input: common::TypeCheckList) -> proc_macro2::TokenStream {
    let check_exprs: Vec<_> = input
        .checks
        .iter()
        .map(|c| common::generate_probe_check(&c.expr, &c.ty))
        .collect();

    quote::quote! {
        (#(#check_exprs)&&*)
    }
}

/// Does `Type` have an associated function `name` with exactly this
/// signature?
///
/// A leading `self`, `&self` or `&mut self` makes it a method check and the
/// receiver form must match too. `Self` stands for `Type`. A missing `-> R`
/// means `-> ()`.
///
/// ```ignore
/// struct Counter(u32);
/// impl Counter {
///     fn new() -> Self { Counter(0) }
///     fn bump(&mut self, by: u32) -> u32 { self.0 += by; self.0 }
/// }
///
/// assert!(has_fn!(Counter, new, fn() -> Self));
/// assert!(has_fn!(Counter, bump, fn(&mut self, u32) -> u32));
/// assert!(!has_fn!(Counter, bump, fn(&self, u32) -> u32));
/// assert!(!has_fn!(Counter, reset, fn(&mut self)));
/// ```
///
/// The answer is a `bool` expression, fixed for the type at build time.
#[proc_macro]
pub fn has_fn(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::MemberCheck);
    user::expand_has_fn(input).into()
}

/// Require `Type` to have the member; fails the build otherwise.
///
/// ```ignore
/// assert_has_fn!(String, with_capacity, fn(usize) -> Self);
/// ```
#[proc_macro]
pub fn assert_has_fn(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::MemberCheck);
    user::expand_assert_has_fn(input).into()
}

/// Declare `check_name!(Type)` testing for an associated (non-method)
/// function.
///
/// ```ignore
/// define_has_static_fn!(has_default_ctor, new, fn() -> Self);
/// assert!(has_default_ctor!(String));
/// ```
#[proc_macro]
pub fn define_has_static_fn(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::DefineCheck);
    user::expand_define_check(input, user::MemberKind::Static)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declare `check_name!(Type)` testing for a method.
///
/// ```ignore
/// define_has_method!(has_len, len, fn(&self) -> usize);
/// assert!(has_len!(String));
/// ```
#[proc_macro]
pub fn define_has_method(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::DefineCheck);
    user::expand_define_check(input, user::MemberKind::Method)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
