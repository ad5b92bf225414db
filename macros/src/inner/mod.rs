// Internal code generators, used by the runtime crate itself

pub mod tuples;
