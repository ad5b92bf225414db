//! Inherent-const probes.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time predicate detection on concrete types.
//!
//! ## How it works
//!
//! For each predicate P:
//! 1. A fallback trait carries `const IS_P: bool = false`
//! 2. The fallback is implemented for `Detect<X>` for every `X`, sized or not
//! 3. An inherent `const IS_P: bool = true` exists on `Detect<X>` where `X: P`
//!
//! When resolving `Detect::<Concrete>::IS_P` the compiler prefers the
//! inherent const if its bound holds and otherwise falls back to the trait
//! const. No type makes the lookup fail.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! Inside `fn foo<T>()` an unbounded `T` answers `false`.

use core::hash::Hash;
use core::marker::PhantomData;

use crate::primitives::Tuple;
use crate::text::{
    CharArray, CharKind, CharPointer, CharUnit, CompatibleChar, CompatibleString, OwnedString,
    StringLike, StringView,
};

/// Single-type probe.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<*const T>);

/// Two-type probe.
#[doc(hidden)]
pub struct DetectPair<A: ?Sized, B: ?Sized>(PhantomData<(*const A, *const B)>);

// =============================================================================
// Boolean probes (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a single-type predicate.
macro_rules! impl_detect {
    ($name:ident: $Trait:path) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<$name:upper>]: bool = false; }
            impl<T: ?Sized> [<$name:camel Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Trait> Detect<T> { pub const [<$name:upper>]: bool = true; }
        }
    };
}

/// Same for a predicate relating `A` to `B`.
macro_rules! impl_detect_pair {
    ($name:ident: $Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<$name:upper>]: bool = false; }
            impl<A: ?Sized, B: ?Sized> [<$name:camel Fallback>] for DetectPair<A, B> {}
            impl<A: ?Sized + $Trait<B>, B: ?Sized> DetectPair<A, B> {
                pub const [<$name:upper>]: bool = true;
            }
        }
    };
}

impl_detect!(is_tuple: Tuple);
impl_detect!(is_char: CharUnit);
impl_detect!(is_owned_string: OwnedString);
impl_detect!(is_string_view: StringView);
impl_detect!(is_char_pointer: CharPointer);
impl_detect!(is_char_array: CharArray);
impl_detect!(is_string: StringLike);
impl_detect!(is_hashable: Hash);

impl_detect_pair!(is_equality_comparable: PartialEq);
impl_detect_pair!(is_less_comparable: PartialOrd);
impl_detect_pair!(is_compatible_string: CompatibleString);
impl_detect_pair!(has_compatible_char: CompatibleChar);

// =============================================================================
// Character-type probes
// =============================================================================
//
// `None` is the value-level `Void`.

#[doc(hidden)]
pub trait StringCharFallback {
    const STRING_CHAR: Option<CharKind> = None;
}
impl<T: ?Sized> StringCharFallback for Detect<T> {}
impl<T: ?Sized + StringLike> Detect<T> {
    pub const STRING_CHAR: Option<CharKind> = Some(<T::Char as CharUnit>::KIND);
}

#[doc(hidden)]
pub trait SharedStringCharFallback {
    const SHARED_STRING_CHAR: Option<CharKind> = None;
}
impl<A: ?Sized, B: ?Sized> SharedStringCharFallback for DetectPair<A, B> {}
impl<A: ?Sized + CompatibleString<B>, B: ?Sized> DetectPair<A, B> {
    pub const SHARED_STRING_CHAR: Option<CharKind> =
        Some(<<A as CompatibleString<B>>::Shared as CharUnit>::KIND);
}

#[doc(hidden)]
pub trait SharedCharFallback {
    const SHARED_CHAR: Option<CharKind> = None;
}
impl<A: ?Sized, B: ?Sized> SharedCharFallback for DetectPair<A, B> {}
impl<A: ?Sized + CompatibleChar<B>, B: ?Sized> DetectPair<A, B> {
    pub const SHARED_CHAR: Option<CharKind> =
        Some(<<A as CompatibleChar<B>>::Shared as CharUnit>::KIND);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Void;
    use crate::text::{Char8, Char16};

    #[test]
    fn test_inherent_wins() {
        assert!(Detect::<(u8, char)>::IS_TUPLE);
        assert!(Detect::<Char16>::IS_CHAR);
        assert!(Detect::<[char]>::IS_CHAR_ARRAY);
        assert_eq!(Detect::<&'static str>::STRING_CHAR, Some(CharKind::Narrow));
        assert!(DetectPair::<u8, u8>::IS_EQUALITY_COMPARABLE);
    }

    #[test]
    fn test_fallback_answers() {
        assert!(!Detect::<[u8; 2]>::IS_TUPLE);
        assert!(!Detect::<u16>::IS_CHAR);
        assert!(!Detect::<Void>::IS_HASHABLE);
        assert!(!Detect::<dyn core::any::Any>::IS_STRING);
        assert_eq!(Detect::<*const u8>::STRING_CHAR, None);
        assert!(!DetectPair::<&'static str, [Char16; 2]>::IS_COMPATIBLE_STRING);
        assert_eq!(DetectPair::<[Char8; 1], char>::SHARED_CHAR, None);
    }
}
