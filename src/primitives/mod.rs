//! # Layer 0: Primitives
//!
//! Building blocks shared by every predicate:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `void.rs`: The `Void` "no type" sentinel.
//! - `tuple.rs`: Tuple detection and element access.

pub mod bool;
pub mod tuple;
pub mod void;

// Re-export key types at this level
pub use bool::{Absent, Bool, If, Present, SelectBool};
pub use tuple::{Nth, Tuple, TupleElement};
pub use void::Void;
