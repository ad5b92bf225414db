//! Logical size of a string or character value.
//!
//! [`logical_size!`](crate::logical_size) picks one of ten tiers with
//! autoref-based method priority: the more `&` an impl's receiver carries,
//! the earlier it is tried. Tiers 4 to 9 see through up to two `&` or
//! `&mut` levels, so `&String` measures like `String` while `&str` stays a
//! view.
//!
//! | Tier | Applies to                       | Result                      |
//! |------|----------------------------------|-----------------------------|
//! | 1    | `T: LogicalLen`                  | `len()`, arrays stop at NUL |
//! | 2    | `T: UnitPtr`                     | NUL scan (`unsafe`)         |
//! | 3    | `T: CharUnit`                    | 1                           |
//! | 4-6  | `&U` with `U` as in tiers 1-3    | as tiers 1-3                |
//! | 7-9  | `&&U` with `U` as in tiers 1-3   | as tiers 1-3                |
//! | 10   | anything                         | 0                           |
//!
//! Tier `k` is implemented on `SizeOf<T>` behind `10 - k` references.

use crate::text::unit::CharUnit;

/// Length of string shapes that can be measured without `unsafe`.
///
/// Owned strings and views report their length in units, arrays report the
/// units before the first NUL (or all of them).
pub trait LogicalLen {
    fn logical_len(&self) -> usize;
}

/// Pointer shapes: exposes the pointer for a NUL scan.
pub trait UnitPtr {
    type Unit: CharUnit;

    fn unit_ptr(&self) -> *const Self::Unit;
}

/// Units before the first NUL of a slice, or the slice length.
#[inline]
pub fn terminated_in<C: CharUnit>(units: &[C]) -> usize {
    units.iter().position(|c| c.is_nul()).unwrap_or(units.len())
}

/// Count the units of a NUL-terminated run. A null pointer measures 0.
///
/// # Safety
///
/// A non-null `ptr` must point to a readable run of units that contains a
/// NUL unit.
pub unsafe fn terminated_len<C: CharUnit>(ptr: *const C) -> usize {
    if ptr.is_null() {
        return 0;
    }
    let mut len = 0;
    // SAFETY: the run is readable up to and including its NUL.
    while !unsafe { *ptr.add(len) }.is_nul() {
        len += 1;
    }
    len
}

/// One reference level, peeled once by the `&U` tiers and twice by the `&&U` tiers.
pub trait Referent {
    type Target: ?Sized;

    fn referent(&self) -> &Self::Target;
}

impl<T: ?Sized> Referent for &T {
    type Target = T;

    #[inline]
    fn referent(&self) -> &T {
        self
    }
}

impl<T: ?Sized> Referent for &mut T {
    type Target = T;

    #[inline]
    fn referent(&self) -> &T {
        self
    }
}

/// Dispatch wrapper used by [`logical_size!`](crate::logical_size).
#[doc(hidden)]
pub struct SizeOf<'a, T: ?Sized>(pub &'a T);

/// Implement a safe measuring tier.
macro_rules! measure_tier {
    ($tier:ident for $recv:ty where [$($bound:tt)*] => |$s:ident| $body:expr) => {
        #[doc(hidden)]
        pub trait $tier {
            fn logical_size(&self) -> usize;
        }

        impl<T> $tier for $recv
        where
            T: ?Sized,
            $($bound)*
        {
            #[inline]
            fn logical_size(&self) -> usize {
                let $s = self;
                $body
            }
        }
    };
}

/// Implement a pointer tier: the NUL scan is the caller's to justify.
macro_rules! measure_pointer_tier {
    ($tier:ident for $recv:ty where [$($bound:tt)*] => |$s:ident| $ptr:expr) => {
        #[doc(hidden)]
        pub trait $tier {
            /// # Safety
            ///
            /// See [`terminated_len`].
            unsafe fn logical_size(&self) -> usize;
        }

        impl<T> $tier for $recv
        where
            T: ?Sized,
            $($bound)*
        {
            #[inline]
            unsafe fn logical_size(&self) -> usize {
                let $s = self;
                // SAFETY: forwarded to the caller.
                unsafe { terminated_len($ptr) }
            }
        }
    };
}

measure_tier!(MeasureString for &&&&&&&&&SizeOf<'_, T> where [T: LogicalLen]
    => |s| s.0.logical_len());
measure_pointer_tier!(MeasurePointer for &&&&&&&&SizeOf<'_, T> where [T: UnitPtr]
    => |s| s.0.unit_ptr());
measure_tier!(MeasureChar for &&&&&&&SizeOf<'_, T> where [T: CharUnit]
    => |_s| 1);

measure_tier!(MeasureRefString for &&&&&&SizeOf<'_, T>
    where [T: Referent, T::Target: LogicalLen]
    => |s| s.0.referent().logical_len());
measure_pointer_tier!(MeasureRefPointer for &&&&&SizeOf<'_, T>
    where [T: Referent, T::Target: UnitPtr]
    => |s| s.0.referent().unit_ptr());
measure_tier!(MeasureRefChar for &&&&SizeOf<'_, T>
    where [T: Referent, T::Target: CharUnit]
    => |_s| 1);

measure_tier!(MeasureRefRefString for &&&SizeOf<'_, T>
    where [T: Referent, T::Target: Referent, <T::Target as Referent>::Target: LogicalLen]
    => |s| s.0.referent().referent().logical_len());
measure_pointer_tier!(MeasureRefRefPointer for &&SizeOf<'_, T>
    where [T: Referent, T::Target: Referent, <T::Target as Referent>::Target: UnitPtr]
    => |s| s.0.referent().referent().unit_ptr());
measure_tier!(MeasureRefRefChar for &SizeOf<'_, T>
    where [T: Referent, T::Target: Referent, <T::Target as Referent>::Target: CharUnit]
    => |_s| 1);

measure_tier!(MeasureOther for SizeOf<'_, T> where [] => |_s| 0);

/// Logical size of a value: string length, 1 for a character, else 0.
///
/// ```
/// use tola_traits::logical_size;
/// use tola_traits::text::Char8;
///
/// assert_eq!(logical_size!("abc"), 3);
/// assert_eq!(logical_size!(String::from("abcefg")), 6);
/// assert_eq!(logical_size!([Char8(b'h'), Char8(b'i'), Char8(0), Char8(b'x')]), 2);
/// assert_eq!(logical_size!('a'), 1);
/// assert_eq!(logical_size!(0.0_f64), 0);
///
/// // Up to two reference levels are seen through.
/// let owned = String::from("abcefg");
/// let borrowed = &owned;
/// assert_eq!(logical_size!(borrowed), 6);
/// assert_eq!(logical_size!(&'a'), 1);
/// ```
///
/// Character pointers are read until their NUL, which needs `unsafe`:
///
/// ```
/// use tola_traits::logical_size;
/// use tola_traits::text::Char8;
///
/// let units = [Char8(b'o'), Char8(b'k'), Char8(0)];
/// let p: *const Char8 = units.as_ptr();
/// assert_eq!(unsafe { logical_size!(p) }, 2);
/// ```
///
/// ```compile_fail
/// use tola_traits::logical_size;
/// use tola_traits::text::Char8;
///
/// let units = [Char8(0)];
/// let p: *const Char8 = units.as_ptr();
/// let _ = logical_size!(p);
/// ```
#[macro_export]
macro_rules! logical_size {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::text::size::{
            MeasureChar as _, MeasureOther as _, MeasurePointer as _, MeasureRefChar as _,
            MeasureRefPointer as _, MeasureRefRefChar as _, MeasureRefRefPointer as _,
            MeasureRefRefString as _, MeasureRefString as _, MeasureString as _,
        };
        (&&&&&&&&&&$crate::text::size::SizeOf(&$value)).logical_size()
    }};
}
