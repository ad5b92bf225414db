#![allow(dead_code)]

//! Tests for the primitive predicates:
//! equality/order comparability, tuples and character types.

use tola_traits::prelude::*;
use tola_traits::{Nth, If};

// =============================================================================
// Equality Comparable
// =============================================================================

#[test]
fn test_equality_std_types() {
    assert!(is_equality_comparable!(String));
    assert!(is_equality_comparable!(i32));
    assert!(is_equality_comparable!(f64));
    assert!(is_equality_comparable!(String, &'static str));
    assert!(is_equality_comparable!(&'static str, String));
}

#[test]
fn test_equality_custom_types() {
    struct NoEqual;

    #[derive(PartialEq)]
    struct Equal;

    assert!(!is_equality_comparable!(NoEqual));
    assert!(is_equality_comparable!(Equal));
}

#[test]
fn test_equality_across_types() {
    struct Meters(f64);
    struct Feet(f64);

    impl PartialEq<Feet> for Meters {
        fn eq(&self, other: &Feet) -> bool {
            self.0 == other.0 * 0.3048
        }
    }

    assert!(is_equality_comparable!(Meters, Feet));
    assert!(!is_equality_comparable!(Feet, Meters));
    assert!(!is_equality_comparable!(Meters));
}

#[test]
fn test_equality_requires_bool_result() {
    // An inherent `eq` yielding something bool-like is not an equality
    // operator.
    struct Fuzzy;
    struct Maybe(bool);

    impl Fuzzy {
        #[allow(dead_code)]
        fn eq(&self, _: &Fuzzy) -> Maybe {
            Maybe(true)
        }
    }

    impl From<Maybe> for bool {
        fn from(m: Maybe) -> bool {
            m.0
        }
    }

    assert!(!is_equality_comparable!(Fuzzy));
}

// =============================================================================
// Less Comparable
// =============================================================================

#[test]
fn test_less_comparable() {
    #[derive(PartialEq)]
    struct NoLess;

    #[derive(PartialEq, PartialOrd)]
    struct Less(u8);

    assert!(is_less_comparable!(f64));
    assert!(is_less_comparable!(String));
    assert!(is_less_comparable!(Less));
    assert!(!is_less_comparable!(NoLess));
    assert!(!is_less_comparable!(i32, i64));
}

#[test]
fn test_less_requires_bool_result() {
    struct Fuzzy;

    impl Fuzzy {
        #[allow(dead_code)]
        fn lt(&self, _: &Fuzzy) -> Option<bool> {
            Some(true)
        }
    }

    assert!(!is_less_comparable!(Fuzzy));
}

// =============================================================================
// Tuple
// =============================================================================

#[test]
fn test_tuple() {
    struct NoTuple {
        _i: i32,
        _f: f64,
    }
    struct TupleStruct(i32, f64);

    assert!(is_tuple!((f64, i32, String)));
    assert!(is_tuple!(()));
    assert!(is_tuple!((u8,)));
    assert!(!is_tuple!([String; 2]));
    assert!(!is_tuple!(f64));
    assert!(!is_tuple!(NoTuple));
    assert!(!is_tuple!(TupleStruct));
}

#[test]
fn test_tuple_elements() {
    type T = (f64, i32, String);

    fn name_of<X>() -> &'static str {
        core::any::type_name::<X>()
    }

    assert_eq!(<T as Tuple>::ARITY, 3);
    assert_eq!(name_of::<Nth<T, 0>>(), "f64");
    assert_eq!(name_of::<Nth<T, 1>>(), "i32");
    assert!(name_of::<Nth<T, 2>>().ends_with("String"));
}

// =============================================================================
// Character Types
// =============================================================================

#[test]
fn test_char() {
    assert!(is_char!(Char8));
    assert!(is_char!(WChar));
    assert!(is_char!(Char16));
    assert!(is_char!(char));

    assert!(!is_char!([Char8]));
    assert!(!is_char!([Char16]));
    assert!(!is_char!([char]));
    assert!(!is_char!(i32));
}

#[test]
fn test_char_excludes_same_width_integers() {
    assert!(!is_char!(u8));
    assert!(!is_char!(i8));
    assert!(!is_char!(u16));
    assert!(!is_char!(u32));
    assert!(!is_char!(&'static char));
}

#[test]
fn test_char_kinds() {
    fn kind<C: CharUnit>() -> CharKind {
        C::KIND
    }

    assert_eq!(kind::<Char8>(), CharKind::Narrow);
    assert_eq!(kind::<WChar>(), CharKind::Wide);
    assert_eq!(kind::<Char16>(), CharKind::Utf16);
    assert_eq!(kind::<char>(), CharKind::Utf32);
}

// =============================================================================
// Const Selection
// =============================================================================

#[test]
fn test_const_selection() {
    struct Yes;
    struct No;

    type PickTuple = If<{ is_tuple!((u8, u8)) }, Yes, No>;
    type PickChar = If<{ is_char!(u8) }, Yes, No>;

    let _: PickTuple = Yes;
    let _: PickChar = No;
}

const _: () = assert!(is_char!(Char16));
const _: () = assert!(!is_tuple!([u8; 2]));
const _: () = assert!(is_equality_comparable!(u8));
