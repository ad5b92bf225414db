//! Tests for `logical_size!` tier selection.

use tola_traits::logical_size;
use tola_traits::text::{Char8, Char16, WChar};

#[test]
fn test_string_or_char_size() {
    assert_eq!(logical_size!(0.0_f64), 0);
    assert_eq!(logical_size!('a'), 1);
    assert_eq!(logical_size!("abc"), 3);
    assert_eq!(logical_size!(String::from("abcefg")), 6);
}

// =============================================================================
// Tier 1: owned / view / array
// =============================================================================

#[test]
fn test_owned_and_views() {
    let owned = vec![Char16(1), Char16(0), Char16(2)];
    // Owned and view shapes report their full length, NULs included.
    assert_eq!(logical_size!(owned), 3);
    assert_eq!(logical_size!(owned.as_slice()), 3);
    assert_eq!(logical_size!(Box::<str>::from("hello")), 5);

    let mut text = String::from("hi");
    assert_eq!(logical_size!(text.as_mut_str()), 2);
}

#[test]
fn test_arrays_stop_at_nul() {
    let buf = [Char8(b'o'), Char8(b'k'), Char8(0), Char8(b'x')];
    assert_eq!(logical_size!(buf), 2);
    assert_eq!(logical_size!(&buf), 2);
    assert_eq!(logical_size!(['n', 'o', 'n', 'u', 'l']), 5);
    assert_eq!(logical_size!([WChar(0); 3]), 0);
}

// =============================================================================
// Tier 2: pointers
// =============================================================================

#[test]
fn test_pointers() {
    let units = [Char8(b'a'), Char8(b'b'), Char8(b'c'), Char8(0)];
    let p: *const Char8 = units.as_ptr();
    assert_eq!(unsafe { logical_size!(p) }, 3);
    assert_eq!(unsafe { logical_size!(&p) }, 3);

    let mut wide = [Char16(0x48), Char16(0x49), Char16(0)];
    let mut m: *mut Char16 = wide.as_mut_ptr();
    assert_eq!(unsafe { logical_size!(m) }, 2);
    assert_eq!(unsafe { logical_size!(&mut m) }, 2);
}

#[test]
fn test_null_pointer() {
    let p: *const char = core::ptr::null();
    assert_eq!(unsafe { logical_size!(p) }, 0);
}

// =============================================================================
// Tiers 4 to 9: borrowed values
// =============================================================================

#[test]
fn test_borrowed_strings() {
    let owned = String::from("abcefg");
    let r = &owned;
    assert_eq!(logical_size!(r), 6);
    assert_eq!(logical_size!(&owned), 6);
    assert_eq!(logical_size!(&&"abc"), 3);

    let mut text = String::from("hello");
    assert_eq!(logical_size!(&mut text), 5);

    let wide = vec![Char16(1), Char16(2)];
    assert_eq!(logical_size!(&wide), 2);
}

#[test]
fn test_borrowed_views_keep_full_length() {
    // `&str` is a view itself, not a reference to the NUL-stopping `str` array.
    let with_nul = "ab\0cd";
    assert_eq!(logical_size!(with_nul), 5);
    assert_eq!(logical_size!(&with_nul), 5);
}

#[test]
fn test_borrowed_characters() {
    assert_eq!(logical_size!(&'a'), 1);
    assert_eq!(logical_size!(&Char8(b'a')), 1);
    let mut unit = WChar(0x41);
    assert_eq!(logical_size!(&mut unit), 1);
}

#[test]
fn test_borrowed_pointers() {
    let units = [Char8(b'x'), Char8(b'y'), Char8(0)];
    let p: *const Char8 = units.as_ptr();
    let r = &p;
    assert_eq!(unsafe { logical_size!(&r) }, 2);
}

#[test]
fn test_two_levels_at_most() {
    assert_eq!(logical_size!(&&'a'), 1);
    assert_eq!(logical_size!(&&&'a'), 0);
    assert_eq!(logical_size!(&42_u8), 0);
    let owned = String::from("deep");
    assert_eq!(logical_size!(&&owned), 4);
    assert_eq!(logical_size!(&&&owned), 0);
}

// =============================================================================
// Tier 3 / 10: characters and everything else
// =============================================================================

#[test]
fn test_characters() {
    assert_eq!(logical_size!(Char8(b'a')), 1);
    assert_eq!(logical_size!(Char16(0)), 1);
    assert_eq!(logical_size!(WChar(0x20)), 1);
}

#[test]
fn test_everything_else() {
    struct Opaque;

    assert_eq!(logical_size!(42_u8), 0);
    assert_eq!(logical_size!(Opaque), 0);
    assert_eq!(logical_size!((1, 2)), 0);
    assert_eq!(logical_size!(vec![1_u8, 2, 3]), 0);
    assert_eq!(logical_size!(*b"bytes"), 0);
}
