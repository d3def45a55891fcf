//! Numeric element type shared by [`Vec3`](super::Vec3) and [`Mat4`](super::Mat4).

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar usable as a vector or matrix component.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;

    fn sqrt(self) -> Self;
    fn recip(self) -> Self;
    fn abs(self) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn identities<T: Scalar>() -> (T, T) {
        (T::zero(), T::one())
    }

    #[test]
    fn test_identities() {
        assert_eq!(identities::<f32>(), (0.0, 1.0));
        assert_eq!(identities::<f64>(), (0.0, 1.0));
    }

    #[test]
    fn test_forwarding() {
        assert_eq!(Scalar::sqrt(16.0_f32), 4.0);
        assert_eq!(Scalar::recip(4.0_f64), 0.25);
        assert_eq!(Scalar::abs(-2.5_f32), 2.5);
    }
}
