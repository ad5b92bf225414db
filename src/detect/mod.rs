//! # Layer 2: Predicate Detection
//!
//! Total, `const` answers for any concrete type. Every predicate from the
//! text and primitive layers has a probe here, plus the comparability and
//! hashing probes that only make sense as questions:
//!
//! ```
//! use tola_traits::{is_equality_comparable, is_hashable, is_string, traits_check};
//!
//! const _: () = assert!(is_string!(&'static str));
//! const _: () = assert!(!is_equality_comparable!(f64, &'static str));
//! const _: () = assert!(is_hashable!(String));
//! const _: () = assert!(traits_check!(Vec<char>: OwnedString & !Tuple));
//! ```
//!
//! ## Comparability
//!
//! `PartialEq::eq` and `PartialOrd::lt` return `bool` by signature, so a
//! type only passes when the comparison yields exactly `bool`. A type that
//! merely has an inherent `eq` returning something convertible to `bool`
//! does not.

pub mod autoref;

pub use autoref::*;

/// Hash a value with the process-wide default hasher.
///
/// The hasher is unkeyed, so equal inputs hash equally for the whole run.
///
/// ```
/// use tola_traits::detect::default_hash;
///
/// assert_eq!(default_hash("abc"), default_hash(&String::from("abc")));
/// ```
#[cfg(feature = "std")]
pub fn default_hash<T: ?Sized + core::hash::Hash>(value: &T) -> u64 {
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}
