//! Compatibility between strings and characters.
//!
//! Two string-like types are *compatible* when they share the same code
//! unit, regardless of shape: `&str`, `String` and `[Char8; 4]` all go
//! together, `&str` and `&[char]` don't.

use crate::primitives::{Bool, Void};
use crate::text::shape::{StringLike, Textual};
use crate::text::unit::CharUnit;

/// `A` and `B` are string-like with the same code unit.
///
/// ```
/// use tola_traits::text::CompatibleString;
///
/// fn join<A: ?Sized + CompatibleString<B>, B: ?Sized + tola_traits::text::StringLike>() {}
/// join::<&str, String>();
/// ```
pub trait CompatibleString<B: ?Sized>: StringLike {
    /// The shared code unit.
    type Shared: CharUnit;
}

impl<A, B> CompatibleString<B> for A
where
    A: ?Sized + StringLike,
    B: ?Sized + StringLike<Char = <A as StringLike>::Char>,
{
    type Shared = <A as StringLike>::Char;
}

/// `A` is string-like and `B` is either a string with the same unit or that
/// unit itself.
pub trait CompatibleChar<B: ?Sized>: StringLike {
    type Shared: CharUnit;
}

impl<A, B> CompatibleChar<B> for A
where
    A: ?Sized + StringLike,
    B: ?Sized + Textual<Char = <A as StringLike>::Char>,
{
    type Shared = <A as StringLike>::Char;
}

/// `Present` iff two string-like types have the same code unit.
///
/// Unlike [`CompatibleString`], this answers `Absent` instead of failing to
/// resolve, so it can be branched on inside generic code.
pub type StringCompat<A, B> =
    <<A as StringLike>::Char as CharUnit>::Same<<B as StringLike>::Char>;

/// `Present` iff the string `A` and the string-or-unit `B` share a unit.
pub type CharCompat<A, B> = <<A as StringLike>::Char as CharUnit>::Same<<B as Textual>::Char>;

/// Shared code unit of two strings, or [`Void`].
pub type SharedStringChar<A, B> =
    <StringCompat<A, B> as Bool>::If<<A as StringLike>::Char, Void>;

/// Shared code unit of a string and a string-or-unit, or [`Void`].
pub type SharedChar<A, B> = <CharCompat<A, B> as Bool>::If<<A as StringLike>::Char, Void>;
