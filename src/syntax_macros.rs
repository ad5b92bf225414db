//! Predicate Macros
//!
//! One macro per probe in [`detect`](crate::detect). Each brings the
//! probe's fallback trait into scope and reads the constant, so the result
//! is usable anywhere a `const` is:
//!
//! ```
//! use tola_traits::{is_char, is_tuple, string_char};
//! use tola_traits::text::{Char16, CharKind};
//!
//! const WIDE: bool = is_char!(Char16);
//! assert!(WIDE);
//! assert!(!is_char!(u16));
//! assert!(is_tuple!((i32, f64)));
//! assert_eq!(string_char!(&'static [char]), Some(CharKind::Utf32));
//! ```
//!
//! Types in these macros are concrete: write `&'static str` rather than
//! `&str` when the macro sits in a `const` or a type position.

// =============================================================================
// Single-type predicates
// =============================================================================

/// `true` for tuples of arity 0 to 12.
#[macro_export]
macro_rules! is_tuple {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsTupleFallback as _;
        $crate::detect::Detect::<$t>::IS_TUPLE
    }};
}

/// `true` for the four code units only.
#[macro_export]
macro_rules! is_char {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsCharFallback as _;
        $crate::detect::Detect::<$t>::IS_CHAR
    }};
}

/// `true` for `String`, `Box<str>`, `Vec<C>`, `Box<[C]>`.
#[macro_export]
macro_rules! is_owned_string {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsOwnedStringFallback as _;
        $crate::detect::Detect::<$t>::IS_OWNED_STRING
    }};
}

/// `true` for `&str`, `&mut str`, `&[C]`, `&mut [C]`.
#[macro_export]
macro_rules! is_string_view {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsStringViewFallback as _;
        $crate::detect::Detect::<$t>::IS_STRING_VIEW
    }};
}

/// `true` for raw unit pointers and references to them.
#[macro_export]
macro_rules! is_char_pointer {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsCharPointerFallback as _;
        $crate::detect::Detect::<$t>::IS_CHAR_POINTER
    }};
}

/// `true` for unit arrays, sized or not, and references to sized ones.
#[macro_export]
macro_rules! is_char_array {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsCharArrayFallback as _;
        $crate::detect::Detect::<$t>::IS_CHAR_ARRAY
    }};
}

/// `true` for any of the four string shapes.
#[macro_export]
macro_rules! is_string {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsStringFallback as _;
        $crate::detect::Detect::<$t>::IS_STRING
    }};
}

/// Code unit of a string-like type as `Option<CharKind>`.
#[macro_export]
macro_rules! string_char {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::StringCharFallback as _;
        $crate::detect::Detect::<$t>::STRING_CHAR
    }};
}

/// `true` when the type can be fed to the default hasher.
#[macro_export]
macro_rules! is_hashable {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsHashableFallback as _;
        $crate::detect::Detect::<$t>::IS_HASHABLE
    }};
}

// =============================================================================
// Two-type predicates
// =============================================================================

/// `a == b` is valid and yields `bool`. The second type defaults to the
/// first.
///
/// ```
/// use tola_traits::is_equality_comparable;
///
/// assert!(is_equality_comparable!(String, &'static str));
/// assert!(!is_equality_comparable!(u8, u16));
/// ```
#[macro_export]
macro_rules! is_equality_comparable {
    ($a:ty) => {
        $crate::is_equality_comparable!($a, $a)
    };
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsEqualityComparableFallback as _;
        $crate::detect::DetectPair::<$a, $b>::IS_EQUALITY_COMPARABLE
    }};
}

/// `a < b` is valid and yields `bool`. The second type defaults to the
/// first.
#[macro_export]
macro_rules! is_less_comparable {
    ($a:ty) => {
        $crate::is_less_comparable!($a, $a)
    };
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsLessComparableFallback as _;
        $crate::detect::DetectPair::<$a, $b>::IS_LESS_COMPARABLE
    }};
}

/// Both are string-like with the same code unit.
#[macro_export]
macro_rules! is_compatible_string {
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::IsCompatibleStringFallback as _;
        $crate::detect::DetectPair::<$a, $b>::IS_COMPATIBLE_STRING
    }};
}

/// Shared code unit of two compatible strings as `Option<CharKind>`.
#[macro_export]
macro_rules! shared_string_char {
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SharedStringCharFallback as _;
        $crate::detect::DetectPair::<$a, $b>::SHARED_STRING_CHAR
    }};
}

/// The first is string-like and the second is a compatible string or
/// the matching code unit.
#[macro_export]
macro_rules! has_compatible_char {
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::HasCompatibleCharFallback as _;
        $crate::detect::DetectPair::<$a, $b>::HAS_COMPATIBLE_CHAR
    }};
}

/// Shared code unit of a string and a string-or-unit as
/// `Option<CharKind>`.
#[macro_export]
macro_rules! shared_char {
    ($a:ty, $b:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::SharedCharFallback as _;
        $crate::detect::DetectPair::<$a, $b>::SHARED_CHAR
    }};
}
