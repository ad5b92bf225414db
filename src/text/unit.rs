//! Code units: the closed set of character types.
//!
//! Exactly four types are character types: [`Char8`] (narrow), [`WChar`]
//! (wide), [`Char16`] (UTF-16 unit) and `char` (UTF-32). The set is sealed.
//! Integers of the same width (`u8`, `u16`, `u32`, ...) are *not* code
//! units, which is why the narrow, wide and UTF-16 units are newtypes.

use core::fmt::Debug;
use core::hash::Hash;

use crate::primitives::{Absent, Bool, Present};

mod sealed {
    pub trait Sealed {}
}

/// Underlying integer of [`WChar`]: 16 bits on Windows, 32 bits elsewhere.
#[cfg(windows)]
pub type WCharRepr = u16;
/// Underlying integer of [`WChar`]: 16 bits on Windows, 32 bits elsewhere.
#[cfg(not(windows))]
pub type WCharRepr = u32;

/// Narrow (byte-sized) code unit, as stored by `String` and `str`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Char8(pub u8);

/// UTF-16 code unit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Char16(pub u16);

/// Platform wide code unit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WChar(pub WCharRepr);

/// Value-level name of a code unit.
///
/// `Option<CharKind>` is how probes report "the character type of this
/// string-like type", with `None` standing for [`Void`](crate::Void).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharKind {
    Narrow,
    Wide,
    Utf16,
    Utf32,
}

/// A character type.
///
/// Besides the value-level [`KIND`](CharUnit::KIND), each unit answers the
/// type-level identity questions so generic code can compare the units of
/// two strings without naming them.
pub trait CharUnit:
    sealed::Sealed + Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static
{
    const KIND: CharKind;

    /// The terminating unit of a NUL-terminated run.
    const NUL: Self;

    type IsNarrow: Bool;
    type IsWide: Bool;
    type IsUtf16: Bool;
    type IsUtf32: Bool;

    /// `Present` iff `Other` is this very unit.
    type Same<Other: CharUnit>: Bool;

    /// Numeric value of the unit.
    fn code(self) -> u32;

    /// Build a unit from a numeric value, truncating to the unit's width.
    fn from_code(code: u32) -> Self;

    #[inline]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

macro_rules! impl_char_unit {
    (
        $ty:ty, $kind:ident, nul = $nul:expr,
        [$narrow:ty, $wide:ty, $utf16:ty, $utf32:ty], same = $same:ident,
        code = |$c:ident| $code:expr,
        from = |$n:ident| $from:expr
    ) => {
        impl sealed::Sealed for $ty {}

        impl CharUnit for $ty {
            const KIND: CharKind = CharKind::$kind;
            const NUL: Self = $nul;

            type IsNarrow = $narrow;
            type IsWide = $wide;
            type IsUtf16 = $utf16;
            type IsUtf32 = $utf32;
            type Same<Other: CharUnit> = Other::$same;

            #[inline]
            fn code(self) -> u32 {
                let $c = self;
                $code
            }

            #[inline]
            fn from_code(code: u32) -> Self {
                let $n = code;
                $from
            }
        }
    };
}

impl_char_unit!(
    Char8, Narrow, nul = Char8(0),
    [Present, Absent, Absent, Absent], same = IsNarrow,
    code = |c| c.0 as u32,
    from = |n| Char8(n as u8)
);

impl_char_unit!(
    WChar, Wide, nul = WChar(0),
    [Absent, Present, Absent, Absent], same = IsWide,
    code = |c| c.0 as u32,
    from = |n| WChar(n as WCharRepr)
);

impl_char_unit!(
    Char16, Utf16, nul = Char16(0),
    [Absent, Absent, Present, Absent], same = IsUtf16,
    code = |c| c.0 as u32,
    from = |n| Char16(n as u16)
);

impl_char_unit!(
    char, Utf32, nul = '\0',
    [Absent, Absent, Absent, Present], same = IsUtf32,
    code = |c| c as u32,
    from = |n| char::from_u32(n).unwrap_or(char::REPLACEMENT_CHARACTER)
);

/// Convert a unit of one character type into another.
///
/// The numeric value is carried over and truncated to the target width.
/// Values that are not Unicode scalars become `U+FFFD` when the target is
/// `char`.
#[inline]
pub fn cast_unit<To: CharUnit, From: CharUnit>(c: From) -> To {
    To::from_code(c.code())
}

impl From<u8> for Char8 {
    fn from(b: u8) -> Self {
        Char8(b)
    }
}

impl From<Char8> for u8 {
    fn from(c: Char8) -> Self {
        c.0
    }
}

impl From<u16> for Char16 {
    fn from(u: u16) -> Self {
        Char16(u)
    }
}

impl From<Char16> for u16 {
    fn from(c: Char16) -> Self {
        c.0
    }
}
