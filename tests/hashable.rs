//! Tests for hash capability detection and the default hasher.

use std::collections::HashMap;
use std::rc::Rc;

use tola_traits::detect::default_hash;
use tola_traits::{Void, is_hashable};

#[test]
fn test_has_std_hash() {
    #[derive(Hash)]
    struct Key(u32);
    struct NoHash;

    assert!(is_hashable!(i32));
    assert!(is_hashable!(String));
    assert!(is_hashable!(*const ()));
    assert!(is_hashable!(Key));
    assert!(!is_hashable!(NoHash));
}

#[test]
fn test_void_is_not_hashable() {
    assert!(!is_hashable!(Void));
}

#[test]
fn test_floats_are_not_hashable() {
    // No `Hash` for floating point: NaN breaks `Eq`.
    assert!(!is_hashable!(f64));
    assert!(!is_hashable!(f32));
}

#[test]
fn test_hashable_composites() {
    assert!(is_hashable!((u8, String)));
    assert!(is_hashable!(Vec<Rc<str>>));
    assert!(is_hashable!(str));
    assert!(is_hashable!([u8]));
    assert!(!is_hashable!(Vec<f64>));
    assert!(!is_hashable!(HashMap<u8, u8>));
}

#[test]
fn test_default_hash() {
    assert_eq!(default_hash(&7_u64), default_hash(&7_u64));
    assert_eq!(default_hash("key"), default_hash(&String::from("key")));
    assert_ne!(default_hash("a"), default_hash("b"));
}
