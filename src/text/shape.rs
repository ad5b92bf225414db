//! String categories.
//!
//! A type is *string-like* when it has one of four shapes over a
//! [`CharUnit`]:
//!
//! | Shape     | Types (`C: CharUnit`)                                            |
//! |-----------|------------------------------------------------------------------|
//! | `Owned`   | `String`, `Box<str>`, `Vec<C>`, `Box<[C]>`                       |
//! | `View`    | `&str`, `&mut str`, `&[C]`, `&mut [C]`                           |
//! | `Pointer` | `*const C`, `*mut C`, `&*const C`, `&*mut C`, `&mut *const C`, `&mut *mut C` |
//! | `Array`   | `[C; N]`, `[C]`, `str`, `&[C; N]`, `&mut [C; N]`                 |
//!
//! Every impl is keyed on the element being a `CharUnit`, so `*const u8` or
//! `Vec<i32>` have the right outline but are not string-like. Each type has
//! at most one impl and therefore exactly one [`Shape`].

use crate::text::size::{LogicalLen, UnitPtr, terminated_in};
use crate::text::unit::{Char8, Char16, CharUnit, WChar};

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Shape tags
// =============================================================================

/// Category tag of a string-like type.
pub trait Shape: sealed::Sealed + 'static {
    const NAME: &'static str;
}

/// Owning, resizable buffer of units.
#[derive(Debug)]
pub struct Owned;

/// Borrowed contiguous run of units.
#[derive(Debug)]
pub struct View;

/// Raw pointer to units, possibly behind a reference.
#[derive(Debug)]
pub struct Pointer;

/// Fixed or unsized array of units, possibly behind a reference.
#[derive(Debug)]
pub struct Array;

macro_rules! impl_shape {
    ($tag:ident, $name:literal) => {
        impl sealed::Sealed for $tag {}
        impl Shape for $tag {
            const NAME: &'static str = $name;
        }
    };
}

impl_shape!(Owned, "owned");
impl_shape!(View, "view");
impl_shape!(Pointer, "pointer");
impl_shape!(Array, "array");

// =============================================================================
// Predicates
// =============================================================================

/// Union predicate: the type has one of the four string shapes.
pub trait StringLike {
    /// Code unit of the string.
    type Char: CharUnit;
    /// Which of the four shapes matched.
    type Shape: Shape;
}

/// `String`-like owning buffers.
pub trait OwnedString: StringLike<Shape = Owned> {}
impl<T: ?Sized + StringLike<Shape = Owned>> OwnedString for T {}

/// Borrowed string views.
pub trait StringView: StringLike<Shape = View> {}
impl<T: ?Sized + StringLike<Shape = View>> StringView for T {}

/// Raw pointers to code units.
pub trait CharPointer: StringLike<Shape = Pointer> {}
impl<T: ?Sized + StringLike<Shape = Pointer>> CharPointer for T {}

/// Arrays of code units.
pub trait CharArray: StringLike<Shape = Array> {}
impl<T: ?Sized + StringLike<Shape = Array>> CharArray for T {}

/// A string-like type or a bare code unit.
///
/// This is the right-hand side accepted by
/// [`CompatibleChar`](crate::text::CompatibleChar): "a matching string or a
/// matching character".
pub trait Textual {
    type Char: CharUnit;
}

macro_rules! impl_textual_unit {
    ($($unit:ty),*) => {
        $(
            impl Textual for $unit {
                type Char = $unit;
            }
        )*
    };
}

impl_textual_unit!(Char8, WChar, Char16, char);

// =============================================================================
// Shape impls
// =============================================================================

/// Implement `StringLike` + `Textual` and the measuring trait for one shape.
///
/// `len` shapes measure with the given closure, `ptr` shapes hand out the
/// raw unit pointer for the unsafe NUL scan.
macro_rules! impl_string_like {
    (
        [$($gen:tt)*] $ty:ty => $unit:ty, $shape:ident,
        len = |$s:ident| $len:expr
    ) => {
        impl_string_like!(@base [$($gen)*] $ty => $unit, $shape);

        impl<$($gen)*> LogicalLen for $ty {
            #[inline]
            fn logical_len(&self) -> usize {
                let $s = self;
                $len
            }
        }
    };
    (
        [$($gen:tt)*] $ty:ty => $unit:ty, $shape:ident,
        ptr = |$s:ident| $ptr:expr
    ) => {
        impl_string_like!(@base [$($gen)*] $ty => $unit, $shape);

        impl<$($gen)*> UnitPtr for $ty {
            type Unit = $unit;

            #[inline]
            fn unit_ptr(&self) -> *const $unit {
                let $s = self;
                $ptr
            }
        }
    };
    (@base [$($gen:tt)*] $ty:ty => $unit:ty, $shape:ident) => {
        impl<$($gen)*> StringLike for $ty {
            type Char = $unit;
            type Shape = $shape;
        }

        impl<$($gen)*> Textual for $ty {
            type Char = $unit;
        }
    };
}

// Owned
#[cfg(feature = "alloc")]
mod owned {
    use super::*;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    impl_string_like!([] String => Char8, Owned, len = |s| s.len());
    impl_string_like!([] Box<str> => Char8, Owned, len = |s| s.len());
    impl_string_like!([C: CharUnit] Vec<C> => C, Owned, len = |s| s.len());
    impl_string_like!([C: CharUnit] Box<[C]> => C, Owned, len = |s| s.len());
}

// View
impl_string_like!(['a] &'a str => Char8, View, len = |s| s.len());
impl_string_like!(['a] &'a mut str => Char8, View, len = |s| s.len());
impl_string_like!(['a, C: CharUnit] &'a [C] => C, View, len = |s| s.len());
impl_string_like!(['a, C: CharUnit] &'a mut [C] => C, View, len = |s| s.len());

// Pointer
impl_string_like!([C: CharUnit] *const C => C, Pointer, ptr = |p| *p);
impl_string_like!([C: CharUnit] *mut C => C, Pointer, ptr = |p| p.cast_const());
impl_string_like!(['a, C: CharUnit] &'a *const C => C, Pointer, ptr = |p| **p);
impl_string_like!(['a, C: CharUnit] &'a *mut C => C, Pointer, ptr = |p| p.cast_const());
impl_string_like!(['a, C: CharUnit] &'a mut *const C => C, Pointer, ptr = |p| **p);
impl_string_like!(['a, C: CharUnit] &'a mut *mut C => C, Pointer, ptr = |p| p.cast_const());

// Array
impl_string_like!([C: CharUnit, const N: usize] [C; N] => C, Array, len = |a| terminated_in(a));
impl_string_like!([C: CharUnit] [C] => C, Array, len = |a| terminated_in(a));
impl_string_like!([] str => Char8, Array, len = |s| {
    s.bytes().position(|b| b == 0).unwrap_or(s.len())
});
impl_string_like!(['a, C: CharUnit, const N: usize] &'a [C; N] => C, Array, len = |a| terminated_in(*a));
impl_string_like!(['a, C: CharUnit, const N: usize] &'a mut [C; N] => C, Array, len = |a| terminated_in(*a));
