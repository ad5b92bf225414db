//! Tuple detection and element access.
//!
//! Only genuine tuples `()`, `(A,)`, `(A, B)`, ... up to arity 12 are
//! `Tuple`. Arrays, structs and tuple structs never are, even when their
//! layout looks like one.

mod sealed {
    pub trait Sealed {}
}

/// Heterogeneous fixed-size product type.
pub trait Tuple: sealed::Sealed {
    /// Number of elements.
    const ARITY: usize;
}

/// Type of the `N`-th tuple element.
pub trait TupleElement<const N: usize>: Tuple {
    type Out;
}

/// `N`-th element type of tuple `T`.
pub type Nth<T, const N: usize> = <T as TupleElement<N>>::Out;

macros::impl_tuples!(12);

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    #[test]
    fn test_arity() {
        assert_eq!(<() as Tuple>::ARITY, 0);
        assert_eq!(<(u8,) as Tuple>::ARITY, 1);
        assert_eq!(<(u8, f64, &str) as Tuple>::ARITY, 3);
        assert_eq!(
            <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as Tuple>::ARITY,
            12
        );
    }

    #[test]
    fn test_nth() {
        type T = (f64, i32, &'static str);
        assert_eq!(TypeId::of::<Nth<T, 0>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<Nth<T, 1>>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<Nth<T, 2>>(), TypeId::of::<&'static str>());
    }
}
