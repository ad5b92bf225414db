//! The "no type" sentinel.

/// Uninhabited placeholder answered where a predicate has no type to give,
/// e.g. the shared code unit of two incompatible strings.
///
/// It deliberately implements nothing beyond `Debug`/`Clone`/`Copy`: it is
/// neither hashable, comparable nor a code unit.
#[derive(Debug, Clone, Copy)]
pub enum Void {}
