//! Every probe compiles for every type and answers `false` / `None` when
//! the type has nothing to offer.

use core::any::Any;

use tola_traits::prelude::*;

struct Opaque;

// =============================================================================
// Single-type probes
// =============================================================================

macro_rules! assert_nothing {
    ($($t:ty),* $(,)?) => {
        $(
            assert!(!is_tuple!($t), "is_tuple: {}", stringify!($t));
            assert!(!is_char!($t), "is_char: {}", stringify!($t));
            assert!(!is_string!($t), "is_string: {}", stringify!($t));
            assert!(!is_owned_string!($t), "is_owned_string: {}", stringify!($t));
            assert!(!is_string_view!($t), "is_string_view: {}", stringify!($t));
            assert!(!is_char_pointer!($t), "is_char_pointer: {}", stringify!($t));
            assert!(!is_char_array!($t), "is_char_array: {}", stringify!($t));
            assert_eq!(string_char!($t), None, "string_char: {}", stringify!($t));
        )*
    };
}

#[test]
fn test_odd_types_answer_false() {
    assert_nothing!(
        Opaque,
        Void,
        dyn Any,
        fn(u8) -> u8,
        [u8],
        [u8; 4],
        &'static [u32],
        *const *const char,
        &'static &'static str,
        Option<String>,
        Box<dyn Any>,
    );
}

#[test]
fn test_unit_is_only_a_tuple() {
    assert!(is_tuple!(()));
    assert!(!is_string!(()));
    assert!(!is_char!(()));
    assert_eq!(logical_size!(()), 0);
}

#[test]
fn test_void_has_no_capabilities() {
    assert!(!is_hashable!(Void));
    assert!(!is_equality_comparable!(Void));
    assert!(!is_less_comparable!(Void));
}

#[test]
fn test_unsized_types() {
    assert!(!is_hashable!(dyn Any));
    assert!(!is_equality_comparable!(dyn Any));
    assert!(is_equality_comparable!(str));
    assert!(is_less_comparable!([u8]));
}

// =============================================================================
// Pair probes
// =============================================================================

#[test]
fn test_pairs_of_odd_types() {
    assert!(!is_equality_comparable!(Opaque, Opaque));
    assert!(!is_less_comparable!(fn(), fn(u8)));
    assert!(!is_compatible_string!(dyn Any, str));
    assert!(!is_compatible_string!(Void, Void));
    assert!(!has_compatible_char!(Opaque, char));
    assert!(!has_compatible_char!(&'static str, Void));
    assert_eq!(shared_string_char!(Opaque, &'static str), None);
    assert_eq!(shared_char!(dyn Any, char), None);
}

// =============================================================================
// Const position
// =============================================================================

const ODD: [bool; 4] = [
    is_string!(fn() -> String),
    is_char!(Option<char>),
    is_tuple!([(u8, u8); 2]),
    is_compatible_string!(Void, String),
];

const _: () = assert!(!ODD[0] && !ODD[1] && !ODD[2] && !ODD[3]);

#[test]
fn test_const_answers() {
    assert_eq!(ODD, [false; 4]);
}
