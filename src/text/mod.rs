//! # Layer 1: Text
//!
//! Character and string vocabulary:
//! - `unit.rs`: The closed set of code units (`CharUnit`).
//! - `shape.rs`: The four string shapes and the `StringLike` union.
//! - `compat.rs`: Same-unit compatibility between strings and characters.
//! - `size.rs`: Logical size of string and character values.

pub mod compat;
pub mod shape;
pub mod size;
pub mod unit;

pub use compat::{
    CharCompat, CompatibleChar, CompatibleString, SharedChar, SharedStringChar, StringCompat,
};
pub use shape::{
    Array, CharArray, CharPointer, Owned, OwnedString, Pointer, Shape, StringLike, StringView,
    Textual, View,
};
pub use size::{LogicalLen, Referent, UnitPtr, terminated_len};
pub use unit::{CharKind, Char8, Char16, CharUnit, WChar, WCharRepr, cast_unit};
