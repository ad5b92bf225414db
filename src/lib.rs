#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and `default_hash`
// - alloc: owned string shapes (`String`, `Box<str>`, `Vec<C>`, `Box<[C]>`)

//! # tola-traits
//!
//! Compile-time type predicates: comparability, tuples, character types,
//! string shapes, string compatibility, hashing and member presence.
//!
//! ## Architecture
//!
//! Every predicate is *total*: asking it about any type, including one with
//! no relevant operations, compiles and answers `false` (or `None`/`Void`
//! for "which type" questions). Predicates come in two forms.
//!
//! ### 1. Traits (generic code)
//! Bound-checkable traits with associated types, resolvable inside generic
//! functions: `CharUnit`, `StringLike` (+ `OwnedString`, `StringView`,
//! `CharPointer`, `CharArray`), `Textual`, `Tuple`, `CompatibleString<B>`,
//! `CompatibleChar<B>`. Type-level answers (`Present`/`Absent`, unit or
//! `Void`) come from `StringCompat`, `SharedStringChar` and friends.
//!
//! ### 2. Probes (concrete types)
//! `is_*!` macros and `traits_check!` answer with a `const bool` for any
//! concrete type using the inherent-const fallback trick.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Void, Tuple                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Text                                                    |
//! |  - CharUnit, StringLike shapes, compatibility, logical size       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Detection                                               |
//! |  - Detect/DetectPair probes, is_*! macros, traits_check!          |
//! +-------------------------------------------------------------------+
//!
//!   Member presence (has_fn!, define_has_*!) stands apart: it needs
//!   nothing from the layers above.
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_traits::prelude::*;
//!
//! // Generic code: bounds and associated types.
//! fn first_unit<S: ?Sized + StringLike>() -> CharKind {
//!     <S::Char as CharUnit>::KIND
//! }
//! assert_eq!(first_unit::<&str>(), CharKind::Narrow);
//!
//! // Concrete types: const predicates.
//! const _: () = assert!(is_char!(char) && !is_char!(u32));
//! const _: () = assert!(is_compatible_string!(String, &'static str));
//! assert!(traits_check!([Char16; 4]: CharArray & !StringView));
//!
//! // Member presence.
//! struct Stack(Vec<u8>);
//! impl Stack {
//!     fn push(&mut self, v: u8) { self.0.push(v) }
//! }
//! assert!(has_fn!(Stack, push, fn(&mut self, u8)));
//! ```

// Allow `::tola_traits` to work inside the crate itself
extern crate self as tola_traits;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Text
// =============================================================================
pub mod text;

// =============================================================================
// Layer 2: Detection
// =============================================================================
pub mod detect;

// is_*! probe macros
pub mod syntax_macros;

// =============================================================================
// Member Presence
// =============================================================================
pub mod member;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Bool, If, Nth, Present, Tuple, TupleElement, Void};
pub use text::{
    CharArray, CharKind, CharPointer, CharUnit, CompatibleChar, CompatibleString, OwnedString,
    StringLike, StringView, Textual,
};

// Re-export proc-macros
pub use macros::traits_check;
pub use member::{assert_has_fn, define_has_method, define_has_static_fn, has_fn};

/// Common items for predicate checks.
pub mod prelude {
    pub use crate::primitives::{Absent, Bool, Present, Tuple, Void};
    pub use crate::text::{
        Char8, Char16, CharArray, CharKind, CharPointer, CharUnit, CompatibleChar,
        CompatibleString, OwnedString, StringLike, StringView, Textual, WChar,
    };
    pub use macros::{assert_has_fn, define_has_method, define_has_static_fn, has_fn, traits_check};
    // Note: is_*!, logical_size! etc. are #[macro_export] so they're at crate root
    pub use crate::{
        has_compatible_char, is_char, is_char_array, is_char_pointer, is_compatible_string,
        is_equality_comparable, is_hashable, is_less_comparable, is_owned_string, is_string,
        is_string_view, is_tuple, logical_size, shared_char, shared_string_char, string_char,
    };
}
