//! Member function presence.
//!
//! One engine, configured at the use site with a target type, a member name
//! and the exact signature:
//!
//! ```
//! use tola_traits::has_fn;
//!
//! struct Meters(f64);
//!
//! impl Meters {
//!     fn zero() -> Self { Meters(0.0) }
//!     fn value(&self) -> f64 { self.0 }
//!     fn scale(&mut self, by: f64) { self.0 *= by }
//!     fn into_inner(self) -> f64 { self.0 }
//! }
//!
//! // Associated ("static") functions: no receiver.
//! assert!(has_fn!(Meters, zero, fn() -> Self));
//! assert!(!has_fn!(Meters, zero, fn() -> f64));
//!
//! // Methods: the receiver form is part of the match.
//! assert!(has_fn!(Meters, value, fn(&self) -> f64));
//! assert!(!has_fn!(Meters, value, fn(&mut self) -> f64));
//! assert!(has_fn!(Meters, scale, fn(&mut self, f64)));
//! assert!(has_fn!(Meters, into_inner, fn(self) -> f64));
//!
//! // Missing members are simply absent.
//! assert!(!has_fn!(Meters, reset, fn(&mut self)));
//! ```
//!
//! A check can be declared once and reused:
//!
//! ```
//! use tola_traits::{define_has_method, define_has_static_fn};
//!
//! define_has_static_fn!(has_with_capacity, with_capacity, fn(usize) -> Self);
//! define_has_method!(has_capacity, capacity, fn(&self) -> usize);
//!
//! assert!(has_with_capacity!(String));
//! assert!(has_with_capacity!(Vec<u8>));
//! assert!(has_capacity!(String));
//! assert!(!has_capacity!(u8));
//! ```
//!
//! ## Requirements
//!
//! [`assert_has_fn!`] turns the question into a build failure naming the
//! member and signature:
//!
//! ```
//! tola_traits::assert_has_fn!(String, with_capacity, fn(usize) -> Self);
//! tola_traits::assert_has_fn!(String, push_str, fn(&mut self, &str));
//! ```
//!
//! ```compile_fail
//! struct Empty;
//! tola_traits::assert_has_fn!(Empty, len, fn(&self) -> usize);
//! ```
//!
//! The generators check the receiver against their kind:
//!
//! ```compile_fail
//! tola_traits::define_has_static_fn!(has_len, len, fn(&self) -> usize);
//! ```
//!
//! ```compile_fail
//! tola_traits::define_has_method!(has_new, new, fn() -> Self);
//! ```
//!
//! ## Kinds
//!
//! A receiver-less signature matches associated functions only, a signature
//! with a receiver matches methods only. An associated function that takes
//! `Self` first is not a method:
//!
//! ```
//! use tola_traits::has_fn;
//!
//! #[derive(Clone, Copy)]
//! struct Celsius(f32);
//!
//! impl Celsius {
//!     fn warmer(c: Self, by: f32) -> Self { Celsius(c.0 + by) }
//!     fn degrees(&self) -> f32 { self.0 }
//! }
//!
//! assert!(has_fn!(Celsius, warmer, fn(Self, f32) -> Self));
//! assert!(!has_fn!(Celsius, warmer, fn(self, f32) -> Self));
//! assert!(has_fn!(Celsius, degrees, fn(&self) -> f32));
//! assert!(!has_fn!(Celsius, degrees, fn(&Self) -> f32));
//! ```
//!
//! Typed receivers (`self: Box<Self>`) are described by their type and
//! count as associated functions.
//!
//! ## Scope
//!
//! Inherent functions are the detected members, and they win over any trait
//! item of the same name. Without an inherent item, a trait in scope that
//! offers the name for the target (`default` with `Default` in the prelude,
//! say) ties with the fallback and the build stops with `E0034`. Prelude
//! traits stay in scope even when shadowed, so no expansion can step around
//! the tie. Ask [`traits_check!`](crate::traits_check) about the trait
//! instead:
//!
//! ```
//! use tola_traits::{has_fn, traits_check};
//!
//! #[derive(Default, Clone)]
//! struct Config;
//!
//! impl Config {
//!     fn clone(&self) -> u8 { 0 }
//! }
//!
//! assert!(traits_check!(Config: Default & Clone));
//! assert!(has_fn!(Config, clone, fn(&self) -> u8));
//! assert!(!has_fn!(Config, clone, fn(&self) -> Self));
//! ```
//!
//! ```compile_fail,E0034
//! #[derive(Default)]
//! struct Config;
//!
//! let _ = tola_traits::has_fn!(Config, default, fn() -> Self);
//! ```
//!
//! Targets are concrete types: inside a generic function the type parameter
//! has no inherent members.

pub use macros::{assert_has_fn, define_has_method, define_has_static_fn, has_fn};
