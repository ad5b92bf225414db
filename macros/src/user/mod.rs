//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `has_fn!` | function macro | Member presence as `bool` |
//! | `assert_has_fn!` | item macro | Member presence as a build requirement |
//! | `define_has_static_fn!` | item macro | Declare a reusable associated-fn check |
//! | `define_has_method!` | item macro | Declare a reusable method check |

pub mod member;

pub use member::{
    expand_assert_has_fn, expand_define_check, expand_has_fn, DefineCheck, MemberCheck,
    MemberKind,
};
